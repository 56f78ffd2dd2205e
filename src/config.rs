//! Configuration System
//!
//! Layered configuration for the client: built-in defaults, the global config file, an
//! explicit `--config` file, then `TEMPO_*` environment variables. Command line flags are
//! layered on top when `Settings` are resolved.

use crate::cli::Cli;
use crate::logging::LoggingConfig;
use crate::settings::DisplayMode;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure (the on-disk `config.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoConfig {
    /// URL of the instrument, e.g. `http://10.10.2.51`
    #[serde(default)]
    pub host: String,

    /// Password for the Automation user
    #[serde(default)]
    pub password: String,

    /// Seconds to wait for a response
    #[serde(default = "default_wait_time")]
    pub wait_time: u64,

    /// Polling interval in seconds when monitoring
    #[serde(default = "default_interval")]
    pub interval: u64,

    /// Output format
    #[serde(default)]
    pub display: DisplayMode,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub(crate) fn default_wait_time() -> u64 {
    10
}

pub(crate) fn default_interval() -> u64 {
    1
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            password: String::new(),
            wait_time: default_wait_time(),
            interval: default_interval(),
            display: DisplayMode::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TempoConfig {
    /// Layer the global command line options over this configuration.
    pub fn with_cli(&self, cli: &Cli) -> Self {
        let mut config = self.clone();
        if let Some(ref host) = cli.host {
            config.host = host.clone();
        }
        if let Some(ref password) = cli.password {
            config.password = password.clone();
        }
        if let Some(wait_time) = cli.wait_time {
            config.wait_time = wait_time;
        }
        if let Some(interval) = cli.interval {
            config.interval = interval;
        }
        if let Some(display) = cli.display {
            config.display = display;
        }
        config
    }

    /// Check values that would otherwise only fail at request time.
    pub fn validate(&self) -> Result<(), String> {
        if !self.host.is_empty() && !self.host.contains("://") {
            return Err(format!(
                "host '{}' must include a scheme, e.g. http://{}",
                self.host, self.host
            ));
        }
        if self.wait_time == 0 {
            return Err("wait_time must be at least 1 second".to_string());
        }
        Ok(())
    }

    /// JSON view for display; the password is masked.
    pub fn to_display_value(&self) -> serde_json::Value {
        let password = if self.password.is_empty() {
            String::new()
        } else {
            "********".to_string()
        };
        serde_json::json!({
            "host": self.host,
            "password": password,
            "waitTime": self.wait_time,
            "interval": self.interval,
            "display": self.display.as_str(),
        })
    }
}
