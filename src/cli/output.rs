//! CLI output: error mapping from domain errors to the stderr surface.

use crate::error::TempoError;

/// Map an invocation error to the line printed on stderr.
pub fn map_error(e: &TempoError) -> String {
    e.to_string()
}
