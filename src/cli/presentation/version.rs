//! Version report and Automation API compatibility check.

use crate::error::{TempoError, TransportError};
use crate::format::HTTP_CODE_FIELD;
use crate::transport::HttpReply;
use serde_json::{json, Map, Value};

/// Version of this client.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status reported when the instrument never answered.
const GATEWAY_TIMEOUT: u16 = 504;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    Compatible,
    Incompatible,
}

pub fn client_major() -> u64 {
    semver::Version::parse(CLIENT_VERSION)
        .map(|v| v.major)
        .unwrap_or(0)
}

/// Major component of an API version string. Falls back to the text before the first
/// dot when the string is not full semver (e.g. "2.1").
pub fn parse_api_major(version: &str) -> Option<u64> {
    if let Ok(parsed) = semver::Version::parse(version.trim()) {
        return Some(parsed.major);
    }
    version.split('.').next()?.trim().parse().ok()
}

/// An API newer in its major version than the client is incompatible. A major that does
/// not parse counts as 0.
pub fn compatibility(api_version: &str, client_major: u64) -> Compatibility {
    let api_major = parse_api_major(api_version).unwrap_or(0);
    if api_major > client_major {
        Compatibility::Incompatible
    } else {
        Compatibility::Compatible
    }
}

/// Build the version report from the liveness probe outcome.
///
/// The report is always produced so it can be printed; the error, if any, decides the
/// exit code.
pub fn version_report(
    outcome: &Result<HttpReply, TransportError>,
) -> (Value, Option<TempoError>) {
    let mut report = Map::new();
    report.insert("version".to_string(), json!(CLIENT_VERSION));

    let reply = match outcome {
        Err(e) => {
            report.insert(HTTP_CODE_FIELD.to_string(), json!(GATEWAY_TIMEOUT));
            return (Value::Object(report), Some(TempoError::Transport(e.clone())));
        }
        Ok(reply) => reply,
    };

    report.insert(HTTP_CODE_FIELD.to_string(), json!(reply.status));
    if !reply.is_ok() {
        return (Value::Object(report), Some(TempoError::HttpStatus(reply.status)));
    }

    let api_version = match automation_api(&reply.body) {
        Ok(version) => version,
        Err(e) => return (Value::Object(report), Some(e)),
    };

    report.insert("automationAPI".to_string(), json!(api_version));
    let error = match compatibility(&api_version, client_major()) {
        Compatibility::Compatible => None,
        Compatibility::Incompatible => {
            report.insert("error".to_string(), json!("incompatible"));
            Some(TempoError::Incompatible {
                api: api_version,
                client: CLIENT_VERSION.to_string(),
            })
        }
    };
    (Value::Object(report), error)
}

fn automation_api(body: &str) -> Result<String, TempoError> {
    let value: Value = serde_json::from_str(body)?;
    value
        .pointer("/device/details/automationAPI")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TempoError::Parse("missing device.details.automationAPI".to_string()))
}
