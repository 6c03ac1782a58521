//! Request middleware
//!
//! This module provides middleware for:
//! - Forwarding responses that end in an error status to their error page
//! - Request tracing with a per-request id

use axum::{
    body::{Body, HttpBody},
    extract::{Request, State},
    http::{self, header, Uri},
    middleware::Next,
    response::Response,
    Router,
};
use error_pages::{ErrorInfo, ErrorPage};
use tower::ServiceExt;

use crate::AppState;

/// State of [`error_page_middleware`]: the error pages and the router that
/// serves them.
#[derive(Clone)]
pub struct ErrorDispatcher {
    state: AppState,
    router: Router,
}

impl ErrorDispatcher {
    /// `router` must serve every registered error page path.
    pub fn new(state: AppState, router: Router) -> Self {
        Self { state, router }
    }

    /// Forward the failed request to `page`.
    ///
    /// The request keeps its method, headers and query; the error goes along
    /// as an [`ErrorInfo`] request extension. Returns `None` when the page
    /// itself produced an empty error response.
    async fn forward(
        &self,
        page: &ErrorPage,
        original: &http::Request<()>,
        info: ErrorInfo,
    ) -> Option<Response> {
        let uri = self.page_uri(page, original.uri())?;

        let mut request = Request::new(Body::empty());
        *request.method_mut() = original.method().clone();
        *request.uri_mut() = uri;
        *request.headers_mut() = original.headers().clone();
        request.headers_mut().remove(header::CONTENT_LENGTH);
        request.headers_mut().remove(header::TRANSFER_ENCODING);
        request.extensions_mut().insert(info);

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        if (status.is_client_error() || status.is_server_error()) && is_body_empty(&response) {
            tracing::warn!(
                error_page = %page.path(),
                status = %status,
                "Error page produced no content"
            );
            return None;
        }
        Some(response)
    }

    fn page_uri(&self, page: &ErrorPage, original: &Uri) -> Option<Uri> {
        let mut uri = format!("{}{}", self.state.properties.context_path, page.path());
        if let Some(query) = original.query() {
            uri.push('?');
            uri.push_str(query);
        }

        match uri.parse() {
            Ok(uri) => Some(uri),
            Err(e) => {
                tracing::warn!(error_page = %page.path(), "Invalid error page path: {}", e);
                None
            }
        }
    }
}

/// Error page middleware.
///
/// A 4xx or 5xx response without a body is replaced by the response of the
/// error page registered for its status, keeping the original status.
/// Responses that already carry a body are passed through untouched, as are
/// errors without a registered page.
///
/// Handlers can describe the error by attaching an [`ErrorInfo`] extension to
/// the bare response; its status and path are overwritten from the response
/// and request before forwarding.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/orders", get(list_orders))
///     .route("/error", any(error_controller))
///     .with_state(state.clone());
/// let dispatcher = ErrorDispatcher::new(state, app.clone());
/// let app = app.layer(middleware::from_fn_with_state(dispatcher, error_page_middleware));
/// ```
pub async fn error_page_middleware(
    State(dispatcher): State<ErrorDispatcher>,
    request: Request,
    next: Next,
) -> Response {
    let mut original = http::Request::new(());
    *original.method_mut() = request.method().clone();
    *original.uri_mut() = request.uri().clone();
    *original.headers_mut() = request.headers().clone();

    let response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || !is_body_empty(&response) {
        return response;
    }

    let Some(page) = dispatcher.state.error_pages.resolve(status.as_u16()) else {
        return response;
    };

    tracing::debug!(
        status = %status,
        path = %original.uri().path(),
        error_page = %page.path(),
        "Forwarding to error page"
    );

    let mut info = response
        .extensions()
        .get::<ErrorInfo>()
        .cloned()
        .unwrap_or_else(ErrorInfo::unknown);
    info.status = Some(status.as_u16());
    info.path = Some(original.uri().path().to_string());

    match dispatcher.forward(page, &original, info).await {
        Some(mut forwarded) => {
            *forwarded.status_mut() = status;
            forwarded
        }
        None => response,
    }
}

fn is_body_empty(response: &Response) -> bool {
    response.body().size_hint().exact() == Some(0)
}

/// Request tracing middleware.
///
/// Adds request ID and logging context for observability.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    let response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    response
}

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;
