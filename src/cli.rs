//! CLI domain: parse, validate, route, help, output, and presentation only.

mod help;
mod output;
mod parse;
mod presentation;
mod route;
mod validate;

pub use help::{command_id, selected_commands};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    client_major, compatibility, license_text, parse_api_major, version_report, Compatibility,
    CLIENT_VERSION,
};
pub use route::{plan, Dispatch, Monitoring, Route, RunContext};
pub use validate::{reports_request, run_request, run_start, run_suffix};
