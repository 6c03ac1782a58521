//! HTTP request handlers
//!
//! The error controller renders the error model either as HTML through the
//! configured error view or as JSON. The error page middleware forwards
//! responses that ended in an error status to it.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use error_pages::{BufferedResponse, ErrorInfo, Model, RequestContext, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::ApiError, AppState};

/// Query parameters understood by the error controller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorParams {
    /// Requests the stack trace when stack traces are included on demand
    pub trace: Option<String>,
}

impl ErrorParams {
    /// `true` when `trace` is present and not `false`.
    pub fn trace_requested(&self) -> bool {
        self.trace
            .as_deref()
            .is_some_and(|value| !value.eq_ignore_ascii_case("false"))
    }
}

/// ANY {error.path}
///
/// Error controller. Errors forwarded by the error page middleware arrive as
/// an [`ErrorInfo`] request extension. A request that reaches the controller
/// directly carries no error, so the model reports the unknown status and the
/// response is a 500.
pub async fn error_controller(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ErrorParams>,
    error: Option<Extension<ErrorInfo>>,
) -> Response {
    let info = error
        .map(|Extension(info)| info)
        .unwrap_or_else(ErrorInfo::unknown);

    render_error(
        &state,
        &info,
        accepts_html(&headers),
        params.trace_requested(),
    )
}

/// Render `info` as an HTML page or a JSON document.
///
/// HTML is used when the client accepts `text/html` and an error view is
/// configured. The response status follows the error status.
pub fn render_error(
    state: &AppState,
    info: &ErrorInfo,
    html: bool,
    trace_requested: bool,
) -> Response {
    let include_stacktrace = state
        .properties
        .error
        .should_include_stacktrace(trace_requested);
    let model = state.attributes.error_attributes(info, include_stacktrace);
    let status = info.http_status();

    match state.error_view.as_deref() {
        Some(view) if html => {
            match render_view(view, &model, status, &state.properties.context_path) {
                Ok(response) => response,
                Err(e) => ApiError::from(e).into_response(),
            }
        }
        _ => (status, Json(Value::Object(model))).into_response(),
    }
}

fn render_view(
    view: &dyn View,
    model: &Model,
    status: StatusCode,
    context_path: &str,
) -> Result<Response, error_pages::Error> {
    let mut buffer = BufferedResponse::new();
    view.render(model, &RequestContext::new(context_path), &mut buffer)?;

    let (content_type, body) = buffer.into_parts();
    let content_type = content_type.unwrap_or_else(|| view.content_type().to_string());

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// Whether any `Accept` header lists `text/html`.
pub fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|media_range| media_range.split(';').next())
        .any(|media_type| media_type.trim().eq_ignore_ascii_case("text/html"))
}

/// GET /health
///
/// Health check endpoint.
///
/// Returns service health status with version and timestamp.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
