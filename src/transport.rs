//! HTTP transport for the instrument.
//!
//! Every call blocks until the instrument answers or the wait time expires. Only one
//! request is ever in flight.

use crate::api::RequestDescriptor;
use crate::error::{TempoError, TransportError};
use crate::settings::Settings;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// User the Automation API authenticates.
pub const AUTOMATION_USER: &str = "Automation";

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Sends one request and waits for the reply.
pub trait Transport {
    fn send(&self, request: &RequestDescriptor) -> Result<HttpReply, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &RequestDescriptor) -> Result<HttpReply, TransportError> {
        (**self).send(request)
    }
}

/// Blocking reqwest transport with basic auth.
pub struct HttpTransport {
    client: Client,
    host: String,
    password: String,
}

impl HttpTransport {
    /// Build a transport for the configured host. No request is sent here.
    pub fn connect(settings: &Settings) -> Result<Self, TempoError> {
        if settings.host.is_empty() {
            return Err(TempoError::ConfigError(
                "No host configured. Pass --host or save one with `tempo config --host <url>`"
                    .to_string(),
            ));
        }
        if !settings.host.contains("://") {
            return Err(TempoError::ConfigError(format!(
                "Host must include a scheme, e.g. https://{}",
                settings.host
            )));
        }

        // The instrument serves a self-signed certificate.
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.wait_time))
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| TempoError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host: settings.host.trim_end_matches('/').to_string(),
            password: settings.password.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &RequestDescriptor) -> Result<HttpReply, TransportError> {
        let url = format!("{}{}", self.host, request.path);
        debug!(request = %request, "Sending request");

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .basic_auth(AUTOMATION_USER, Some(&self.password));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "Received response");

        Ok(HttpReply { status, body })
    }
}
