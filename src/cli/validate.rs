//! Option validation and request building for the commands that take options.
//!
//! Every builder either returns the single request to send or the message explaining
//! which options cannot be combined. Nothing here touches the network.

use crate::api::{self, ProtocolLocation, RequestDescriptor, RunStart};
use crate::error::TempoError;
use crate::settings::Settings;

fn invalid(message: &str) -> TempoError {
    TempoError::InvalidOptions(message.to_string())
}

/// Single report, report count, or a page of reports.
///
/// `--id`, `--count` and the `--limit`/`--offset` pair are mutually exclusive groups.
pub fn reports_request(settings: &Settings) -> Result<RequestDescriptor, TempoError> {
    let paged = settings.limit != 0 || settings.offset != 0;

    if !settings.run_id.is_empty() {
        if settings.count_reports || paged {
            return Err(invalid(
                "The --id option is not used with any other option.",
            ));
        }
        Ok(api::report(&settings.run_id))
    } else if settings.count_reports {
        if paged {
            return Err(invalid(
                "The --count option is not used with any other option.",
            ));
        }
        Ok(api::reports_count())
    } else {
        Ok(api::reports(settings.limit, settings.offset))
    }
}

/// Numeric suffix for synthesized plate ids and run names: the last four decimal digits
/// of the epoch-millisecond timestamp.
pub fn run_suffix(now_millis: i64) -> i64 {
    now_millis.rem_euclid(10_000)
}

/// Run status when no protocol is named, otherwise the run-start request.
pub fn run_request(settings: &Settings, now_millis: i64) -> Result<RequestDescriptor, TempoError> {
    if settings.protocol.is_empty() {
        let start_only = settings.public_protocols
            || settings.template_protocol
            || !settings.plate_id.is_empty()
            || !settings.run_name.is_empty()
            || settings.volume > 0
            || settings.lid_temp > 0;
        if start_only {
            return Err(invalid(
                "The --volume, --plate, --name, --public, --templates, and --temp options \
                 require the --protocol option.",
            ));
        }
        return Ok(api::run_status());
    }

    if settings.public_protocols && settings.template_protocol {
        return Err(invalid(
            "The --public and --templates options are mutually exclusive.",
        ));
    }

    let run = run_start(settings, now_millis);
    Ok(api::start_run(&run)?)
}

/// Run-start body with defaults filled in for an empty plate id or run name.
pub fn run_start(settings: &Settings, now_millis: i64) -> RunStart {
    let location = if settings.public_protocols {
        ProtocolLocation::Public
    } else if settings.template_protocol {
        ProtocolLocation::Templates
    } else {
        ProtocolLocation::User
    };

    let suffix = run_suffix(now_millis);
    let plate_id = if settings.plate_id.is_empty() {
        format!("plate{}", suffix)
    } else {
        settings.plate_id.clone()
    };
    let run_name = if settings.run_name.is_empty() {
        format!("run{}{}", settings.protocol, suffix)
    } else {
        settings.run_name.clone()
    };

    RunStart {
        protocol_name: settings.protocol.clone(),
        location,
        run_name,
        plate_id,
        volume: Some(settings.volume).filter(|v| *v > 0),
        lid_temp: Some(settings.lid_temp).filter(|t| *t > 0),
    }
}
