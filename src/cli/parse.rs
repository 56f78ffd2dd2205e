//! CLI parse: clap types for the Tempo client. No behavior; definitions only.

use crate::settings::DisplayMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tempo CLI - command line client for the Tempo instrument Automation API
#[derive(Parser, Debug)]
#[command(name = "tempo")]
#[command(about = "Controls a Tempo instrument through its Automation API")]
pub struct Cli {
    /// Without a command, checks that the instrument is reachable
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Host of the instrument, e.g. http://10.10.2.51
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Password for the Automation user
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Seconds to wait for a response
    #[arg(long = "waitTime", global = true)]
    pub wait_time: Option<u64>,

    /// Polling interval in seconds when monitoring
    #[arg(long, global = true)]
    pub interval: Option<u64>,

    /// Output display format
    #[arg(long, value_enum, global = true)]
    pub display: Option<DisplayMode>,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Gets the instrument lid status
    Lid {
        /// Monitor lid status until the lid stops moving
        #[arg(long)]
        monitor: bool,
    },
    /// Opens the instrument lid
    Open,
    /// Closes the instrument lid
    Close,
    /// Gets a brief status of the instrument and the running protocol
    Status {
        /// Monitor instrument status while a protocol is running
        #[arg(long)]
        monitor: bool,
    },
    /// Gets the list of device faults
    Errors {
        /// Clear device faults
        #[arg(long)]
        clear: bool,
    },
    /// Lists run reports, or retrieves one report
    Reports {
        /// Run id of the report to retrieve. Not used with any other option
        #[arg(long)]
        id: Option<String>,
        /// Return the total count of reports. Not used with any other option
        #[arg(long)]
        count: bool,
        /// Number of reports to retrieve. Not used with --id or --count
        #[arg(long)]
        limit: Option<u64>,
        /// Offset at which to start the list. Not used with --id or --count
        #[arg(long)]
        offset: Option<u64>,
    },
    /// Lists the protocols in the Automation user's folder
    Protocols {
        /// List the Public protocols instead
        #[arg(long)]
        public: bool,
    },
    /// Without options, gets the run status. With --protocol, starts a run
    Run {
        /// Name of the protocol to run
        #[arg(long)]
        protocol: Option<String>,
        /// Name for the run. Requires --protocol
        #[arg(long)]
        name: Option<String>,
        /// ID of the plate used in the run. Requires --protocol
        #[arg(long)]
        plate: Option<String>,
        /// Volume for the run. Requires --protocol
        #[arg(long, allow_negative_numbers = true)]
        volume: Option<i64>,
        /// Lid temperature for the run. Requires --protocol
        #[arg(long, allow_negative_numbers = true)]
        temp: Option<i64>,
        /// The protocol is in the Public folder. Requires --protocol
        #[arg(long)]
        public: bool,
        /// The protocol is a template. Requires --protocol
        #[arg(long)]
        templates: bool,
        /// Monitor run status while the run is active
        #[arg(long)]
        monitor: bool,
    },
    /// Stops the protocol run
    Stop,
    /// Skips the active step of the protocol run
    Skip,
    /// Pauses the protocol run
    Pause,
    /// Resumes the protocol run
    Resume,
    /// Saves the global options as defaults in the config file
    Config,
    /// Prints the copyright licenses
    License,
    /// Prints the versions and checks Automation API compatibility
    Version,
}
