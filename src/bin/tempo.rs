//! Tempo CLI Binary
//!
//! Command-line client for the PTC Tempo instrument.

use clap::Parser;
use crossterm::tty::IsTty;
use owo_colors::OwoColorize;
use std::io;
use std::process;
use tempo::cli::{map_error, selected_commands, Cli, RunContext};
use tempo::config::ConfigLoader;
use tempo::error::TempoError;
use tempo::logging::{init_logging, LoggingConfig};
use tempo::monitor::detect_screen;
use tempo::settings::Settings;
use tempo::transport::HttpTransport;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Tempo CLI starting");

    let (settings, persisted) = match Settings::load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            fail(&e);
        }
    };
    let context = RunContext::new(&settings, &persisted, cli.config.clone());

    let mut screen = detect_screen();
    let result = context.execute(
        &selected_commands(&cli),
        HttpTransport::connect,
        screen.as_mut(),
        &mut io::stdout(),
    );

    match result {
        Ok(()) => info!("Command completed successfully"),
        Err(e) => {
            error!("Command failed: {}", e);
            fail(&e);
        }
    }
}

/// Print the error on stderr and exit with its code.
fn fail(e: &TempoError) -> ! {
    let message = map_error(e);
    if io::stderr().is_tty() {
        eprintln!("{}", message.red());
    } else {
        eprintln!("{}", message);
    }
    process::exit(e.exit_code());
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::load(cli.config.as_deref())
        .ok()
        .map(|c| c.logging)
        .unwrap_or_default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
