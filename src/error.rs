//! Error types for the Tempo command line client.

use thiserror::Error;

/// Failure categories reported by the HTTP transport.
///
/// The numeric codes are what the process exits with when a request never produced an
/// HTTP response, and they match the numbering earlier Tempo clients used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Unknown,
    Connection,
    Read,
    Write,
    Redirect,
    ConnectionTimeout,
}

impl TransportErrorKind {
    pub fn code(self) -> i32 {
        match self {
            TransportErrorKind::Unknown => 1,
            TransportErrorKind::Connection => 2,
            TransportErrorKind::Read => 4,
            TransportErrorKind::Write => 5,
            TransportErrorKind::Redirect => 6,
            TransportErrorKind::ConnectionTimeout => 13,
        }
    }
}

/// A request that never produced an HTTP response.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.kind.code()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_connect() && error.is_timeout() {
            TransportErrorKind::ConnectionTimeout
        } else if error.is_timeout() {
            TransportErrorKind::Read
        } else if error.is_connect() {
            TransportErrorKind::Connection
        } else if error.is_redirect() {
            TransportErrorKind::Redirect
        } else if error.is_body() || error.is_decode() {
            TransportErrorKind::Read
        } else if error.is_request() {
            TransportErrorKind::Write
        } else {
            TransportErrorKind::Unknown
        };
        TransportError::new(kind, error.to_string())
    }
}

/// Errors surfaced by a single client invocation
#[derive(Debug, Error)]
pub enum TempoError {
    #[error("Error. {0}")]
    InvalidOptions(String),

    #[error("HTTP client error: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No request has been sent to the instrument")]
    NoResponse,

    #[error("Monitoring stopped: unable to refresh the status display")]
    MonitorFailed,

    #[error("Automation API {api} is not compatible with client version {client}")]
    Incompatible { api: String, client: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TempoError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            TempoError::Transport(e) => e.code(),
            TempoError::HttpStatus(status) => i32::from(*status),
            _ => 1,
        }
    }
}

impl From<serde_json::Error> for TempoError {
    fn from(err: serde_json::Error) -> Self {
        TempoError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for TempoError {
    fn from(err: config::ConfigError) -> Self {
        TempoError::ConfigError(err.to_string())
    }
}
