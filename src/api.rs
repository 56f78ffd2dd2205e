//! Tempo Automation API request descriptors
//!
//! One constructor per endpoint the client uses. Descriptors are plain data; the
//! transport turns them into HTTP requests.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// The resolved verb, path, query and optional JSON body for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            body: Some(body),
            ..Self::new(Method::Post, path)
        }
    }

    fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method.as_str(), self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// Liveness probe; also carries the API version.
pub fn ping() -> RequestDescriptor {
    RequestDescriptor::get("/tempo")
}

pub fn lid() -> RequestDescriptor {
    RequestDescriptor::get("/tempo/lid")
}

pub fn open_lid() -> RequestDescriptor {
    RequestDescriptor::put("/tempo/lid/open")
}

pub fn close_lid() -> RequestDescriptor {
    RequestDescriptor::put("/tempo/lid/close")
}

pub fn status() -> RequestDescriptor {
    RequestDescriptor::get("/tempo/status")
}

/// Device faults; clearing returns the list that remains.
pub fn faults(clear: bool) -> RequestDescriptor {
    if clear {
        RequestDescriptor::put("/tempo/errors/clear")
    } else {
        RequestDescriptor::get("/tempo/errors")
    }
}

pub fn protocols(public: bool) -> RequestDescriptor {
    if public {
        RequestDescriptor::get("/tempo/protocols/public")
    } else {
        RequestDescriptor::get("/tempo/protocols/user")
    }
}

/// Page of run reports. Zero means "not supplied" for both limit and offset.
pub fn reports(limit: u64, offset: u64) -> RequestDescriptor {
    let mut request = RequestDescriptor::get("/tempo/run-reports");
    if limit > 0 {
        request = request.with_query("limit", limit);
    }
    if offset > 0 {
        request = request.with_query("offset", offset);
    }
    request
}

pub fn report(run_id: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/tempo/run-reports/{}", run_id))
}

pub fn reports_count() -> RequestDescriptor {
    RequestDescriptor::get("/tempo/run-reports/count")
}

pub fn run_status() -> RequestDescriptor {
    RequestDescriptor::get("/tempo/protocol-run")
}

pub fn start_run(run: &RunStart) -> Result<RequestDescriptor, serde_json::Error> {
    Ok(RequestDescriptor::post(
        "/tempo/protocol-run",
        serde_json::to_value(run)?,
    ))
}

pub fn stop_run() -> RequestDescriptor {
    RequestDescriptor::put("/tempo/protocol-run/stop")
}

pub fn skip_step() -> RequestDescriptor {
    RequestDescriptor::put("/tempo/protocol-run/skip")
}

pub fn pause_run() -> RequestDescriptor {
    RequestDescriptor::put("/tempo/protocol-run/pause")
}

pub fn resume_run() -> RequestDescriptor {
    RequestDescriptor::put("/tempo/protocol-run/resume")
}

/// Folder a protocol is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolLocation {
    Public,
    Templates,
    User,
}

/// Body of a run-start request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStart {
    pub protocol_name: String,
    pub location: ProtocolLocation,
    pub run_name: String,
    #[serde(rename = "plateID")]
    pub plate_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lid_temp: Option<i64>,
}
