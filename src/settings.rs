//! Settings: the flat value object every command reads its options from.
//!
//! Built once at startup from the layered configuration and the parsed command line.
//! Nothing mutates it afterwards; run-start defaults are synthesized into the request
//! instead of being written back.

use crate::cli::{Cli, Commands};
use crate::config::{ConfigLoader, TempoConfig};
use crate::error::TempoError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How responses are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// JSON with the structural punctuation stripped
    Text,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Json => "json",
            DisplayMode::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    // instrument
    pub host: String,
    pub password: String,
    /// Seconds to wait for a response
    pub wait_time: u64,

    // errors
    pub clear_faults: bool,

    // reports; limit and offset use 0 for "not supplied"
    pub run_id: String,
    pub limit: u64,
    pub offset: u64,
    pub count_reports: bool,

    // run
    pub protocol: String,
    pub run_name: String,
    pub volume: i64,
    pub lid_temp: i64,
    pub plate_id: String,
    pub public_protocols: bool,
    pub template_protocol: bool,

    // monitoring and display
    pub monitor: bool,
    /// Seconds between polls while monitoring
    pub interval: u64,
    pub display: DisplayMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&TempoConfig::default())
    }
}

impl Settings {
    /// Settings carrying only the configured connection and display defaults.
    pub fn from_config(config: &TempoConfig) -> Self {
        Self {
            host: config.host.clone(),
            password: config.password.clone(),
            wait_time: config.wait_time,
            clear_faults: false,
            run_id: String::new(),
            limit: 0,
            offset: 0,
            count_reports: false,
            protocol: String::new(),
            run_name: String::new(),
            volume: 0,
            lid_temp: 0,
            plate_id: String::new(),
            public_protocols: false,
            template_protocol: false,
            monitor: false,
            interval: config.interval,
            display: config.display,
        }
    }

    /// Layer command line values over the loaded configuration.
    pub fn resolve(config: &TempoConfig, cli: &Cli) -> Self {
        let mut settings = Self::from_config(&config.with_cli(cli));
        if let Some(ref command) = cli.command {
            settings.apply_command(command);
        }
        settings
    }

    /// Load the layered configuration for `cli` and resolve settings from it.
    ///
    /// Also returns what `tempo config` persists: the config files with the command line
    /// on top. Environment overrides apply to this run only and are never saved.
    pub fn load(cli: &Cli) -> Result<(Self, TempoConfig), TempoError> {
        let explicit = cli.config.as_deref();
        let loaded = ConfigLoader::load(explicit)?;
        let persisted = ConfigLoader::load_files(explicit)?.with_cli(cli);
        Ok((Self::resolve(&loaded, cli), persisted))
    }

    fn apply_command(&mut self, command: &Commands) {
        match command {
            Commands::Lid { monitor } | Commands::Status { monitor } => {
                self.monitor = *monitor;
            }
            Commands::Errors { clear } => self.clear_faults = *clear,
            Commands::Reports {
                id,
                count,
                limit,
                offset,
            } => {
                self.run_id = id.clone().unwrap_or_default();
                self.count_reports = *count;
                self.limit = limit.unwrap_or(0);
                self.offset = offset.unwrap_or(0);
            }
            Commands::Protocols { public } => self.public_protocols = *public,
            Commands::Run {
                protocol,
                name,
                plate,
                volume,
                temp,
                public,
                templates,
                monitor,
            } => {
                self.protocol = protocol.clone().unwrap_or_default();
                self.run_name = name.clone().unwrap_or_default();
                self.plate_id = plate.clone().unwrap_or_default();
                self.volume = volume.unwrap_or(0);
                self.lid_temp = temp.unwrap_or(0);
                self.public_protocols = *public;
                self.template_protocol = *templates;
                self.monitor = *monitor;
            }
            Commands::Open
            | Commands::Close
            | Commands::Stop
            | Commands::Skip
            | Commands::Pause
            | Commands::Resume
            | Commands::Config
            | Commands::License
            | Commands::Version => {}
        }
    }
}
