//! Config loader facade: builds the layered configuration and persists it.

use super::merge::merge_policy;
use super::sources::{explicit_file, global_file};
use super::TempoConfig;
use crate::error::TempoError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads and saves `TempoConfig`.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, an optional explicit file and the environment.
    ///
    /// Values are not validated here: command line options may still replace them.
    pub fn load(explicit: Option<&Path>) -> Result<TempoConfig, TempoError> {
        let builder = merge_policy::add_environment(Self::file_layers(explicit)?);
        let config: TempoConfig = builder.build()?.try_deserialize()?;
        debug!(host = %config.host, "Configuration loaded");
        Ok(config)
    }

    /// Defaults and config files only, without environment overrides.
    pub fn load_files(explicit: Option<&Path>) -> Result<TempoConfig, TempoError> {
        let config: TempoConfig = Self::file_layers(explicit)?.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load a single file without the global file or the environment.
    pub fn load_from_file(path: &Path) -> Result<TempoConfig, TempoError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = explicit_file::add_to_builder(builder, path)?;
        let config: TempoConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    fn file_layers(explicit: Option<&Path>) -> Result<ConfigBuilder<DefaultState>, TempoError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        Ok(builder)
    }

    /// Where `config` writes: the explicit path if given, otherwise the global file.
    pub fn target_path(explicit: Option<&Path>) -> Result<PathBuf, TempoError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => global_file::global_config_path().ok_or_else(|| {
                TempoError::ConfigError(
                    "Cannot locate a config directory: neither XDG_CONFIG_HOME nor HOME is set"
                        .to_string(),
                )
            }),
        }
    }

    /// Write the configuration as TOML, creating the parent directory when needed.
    pub fn save(path: &Path, config: &TempoConfig) -> Result<(), TempoError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    TempoError::ConfigError(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let contents = toml::to_string_pretty(config)
            .map_err(|e| TempoError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents).map_err(|e| {
            TempoError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!(config_path = %path.display(), "Configuration saved");
        Ok(())
    }
}
