//! Tempo: command line client for the PTC Tempo Automation API
//!
//! Turns one command per invocation into a request against the instrument, validates
//! which options may combine, optionally monitors the instrument until a transitional
//! state settles, and renders responses as pretty JSON or flattened text.

pub mod api;
pub mod cli;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod monitor;
pub mod settings;
pub mod transport;
