//! Error attributes: the model error views are rendered from.
//!
//! The default attributes are:
//!
//! | key         | value                                                   |
//! |-------------|---------------------------------------------------------|
//! | `timestamp` | when the error occurred, RFC 3339                       |
//! | `status`    | HTTP status code, `999` when unknown                    |
//! | `error`     | reason phrase for the status, `"None"` when unknown     |
//! | `message`   | error message, `"No message available"` when absent     |
//! | `path`      | request path, when known                                |
//! | `exception` | error type name, only when enabled                      |
//! | `trace`     | stack trace, only when requested                        |

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;

/// The model handed to error views.
pub type Model = Map<String, Value>;

/// Status reported when the error carries no status code.
pub const UNKNOWN_STATUS: u16 = 999;

/// Message reported when the error carries no message.
pub const NO_MESSAGE: &str = "No message available";

/// What is known about an error that is being reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub timestamp: DateTime<Utc>,
    pub status: Option<u16>,
    pub message: Option<String>,
    pub exception: Option<String>,
    pub trace: Option<String>,
    pub path: Option<String>,
}

impl ErrorInfo {
    /// An error with the given HTTP status, timestamped now.
    pub fn new(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::unknown()
        }
    }

    /// An error with nothing known about it, timestamped now.
    pub fn unknown() -> Self {
        Self {
            timestamp: Utc::now(),
            status: None,
            message: None,
            exception: None,
            trace: None,
            path: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The HTTP status to respond with; unknown or invalid codes become 500.
    pub fn http_status(&self) -> StatusCode {
        self.status
            .and_then(|status| StatusCode::from_u16(status).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Builds the model for an error.
pub trait ErrorAttributes: Send + Sync {
    fn error_attributes(&self, error: &ErrorInfo, include_stacktrace: bool) -> Model;
}

/// The standard set of error attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorAttributes {
    include_exception: bool,
}

impl DefaultErrorAttributes {
    pub fn new(include_exception: bool) -> Self {
        Self { include_exception }
    }

    fn add_status(model: &mut Model, status: Option<u16>) {
        let Some(status) = status else {
            model.insert("status".to_string(), UNKNOWN_STATUS.into());
            model.insert("error".to_string(), "None".into());
            return;
        };

        model.insert("status".to_string(), status.into());
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Http Status");
        model.insert("error".to_string(), reason.into());
    }
}

impl ErrorAttributes for DefaultErrorAttributes {
    fn error_attributes(&self, error: &ErrorInfo, include_stacktrace: bool) -> Model {
        let mut model = Model::new();
        model.insert("timestamp".to_string(), error.timestamp.to_rfc3339().into());
        Self::add_status(&mut model, error.status);

        if self.include_exception {
            if let Some(exception) = &error.exception {
                model.insert("exception".to_string(), exception.clone().into());
            }
        }

        let message = error
            .message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(NO_MESSAGE);
        model.insert("message".to_string(), message.into());

        if include_stacktrace {
            if let Some(trace) = &error.trace {
                model.insert("trace".to_string(), trace.clone().into());
            }
        }

        if let Some(path) = &error.path {
            model.insert("path".to_string(), path.clone().into());
        }

        model
    }
}
