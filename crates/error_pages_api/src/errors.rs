//! Failures inside the error handling itself
//!
//! When an error page cannot be produced (the view fails to render, the
//! response cannot be built) the service answers with this fixed JSON body
//! instead. Nothing from the underlying failure is exposed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body sent when an error page could not be rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetails,
}

/// Error details structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Axum response wrapper for internal failures
///
/// # Example
///
/// ```rust,ignore
/// fn render(view: &dyn View) -> Result<Response, ApiError> {
///     view.render(&model, &context, &mut response)?; // error_pages::Error -> ApiError
///     Ok(response.into_response())
/// }
/// ```
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        log_error(&self.0, status);

        let error_response = ErrorResponse {
            error: ErrorDetails {
                code: "InternalError".to_string(),
                message: "An internal error occurred".to_string(),
                details: None,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
pub(crate) fn log_error(error: &anyhow::Error, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!("API error: {} - {:#}", status, error);
    } else if status.is_client_error() {
        tracing::warn!("API error: {} - {:#}", status, error);
    } else {
        tracing::info!("API error: {} - {:#}", status, error);
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
