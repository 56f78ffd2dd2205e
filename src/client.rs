//! Instrument client: sends requests and keeps the most recent reply.

use crate::api::RequestDescriptor;
use crate::error::{TempoError, TransportError};
use crate::format;
use crate::settings::DisplayMode;
use crate::transport::{HttpReply, Transport};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, warn};

/// Wraps a transport and remembers the outcome of the last request.
pub struct TempoClient<T> {
    transport: T,
    last: Option<Result<HttpReply, TransportError>>,
}

impl<T: Transport> TempoClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            last: None,
        }
    }

    /// Send a request, replacing the previous reply.
    pub fn send(&mut self, request: &RequestDescriptor) {
        let outcome = self.transport.send(request);
        match outcome {
            Ok(ref reply) => debug!(request = %request, status = reply.status, "Request completed"),
            Err(ref e) => warn!(request = %request, error = %e, "Request failed"),
        }
        self.last = Some(outcome);
    }

    /// Outcome of the last request, if any was sent.
    pub fn last(&self) -> Option<&Result<HttpReply, TransportError>> {
        self.last.as_ref()
    }

    /// The last reply if it succeeded, otherwise the transport or HTTP error.
    pub fn check(&self) -> Result<&HttpReply, TempoError> {
        match self.last {
            None => Err(TempoError::NoResponse),
            Some(Err(ref e)) => Err(TempoError::Transport(e.clone())),
            Some(Ok(ref reply)) if reply.is_ok() => Ok(reply),
            Some(Ok(ref reply)) => Err(TempoError::HttpStatus(reply.status)),
        }
    }

    /// String value of a top-level field in the last successful reply.
    pub fn state(&self, field: &str) -> Result<String, TempoError> {
        let reply = self.check()?;
        let value: Value = serde_json::from_str(&reply.body)?;
        Ok(value
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    /// Rendering of the last reply, or the error the print path reports.
    pub fn render(&self, mode: DisplayMode) -> Result<String, TempoError> {
        let reply = self.check()?;
        format::render_response(&reply.body, mode)
    }

    /// Write the rendering of the last reply followed by a newline.
    pub fn print(&self, mode: DisplayMode, out: &mut dyn Write) -> Result<(), TempoError> {
        let rendered = self.render(mode)?;
        writeln!(out, "{}", rendered)?;
        out.flush()?;
        Ok(())
    }
}
