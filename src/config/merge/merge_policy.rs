//! Merge rules: defaults and override order.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("host", "")?
        .set_default("password", "")?
        .set_default("wait_time", super::super::default_wait_time())?
        .set_default("interval", super::super::default_interval())?
        .set_default("display", "json")
}

/// Environment overrides (`TEMPO_HOST`, `TEMPO_WAIT_TIME`, ...) win over every file.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("TEMPO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
