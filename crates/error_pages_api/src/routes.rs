//! HTTP routing configuration
//!
//! # Route Structure
//!
//! Routes live under the configured context path (none by default):
//!
//! - ANY {servlet prefix}{error.path} - Error controller (default `/error`)
//! - GET /health - Health check
//!
//! Every other request falls through to a bare 404, which the error page
//! middleware forwards to the registered error page.

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use std::time::Duration;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    handlers,
    middleware::{self as api_middleware, ErrorDispatcher},
    AppState,
};

/// Create the router with the error controller and health check only.
pub fn create_router(state: AppState) -> Router {
    create_router_with(Router::new(), state)
}

/// Add error handling to an application router.
///
/// This function sets up:
/// - The error controller and health check routes
/// - Forwarding of bare error responses to their error page
/// - Request tracing
/// - Timeout handling
///
/// # Panics
///
/// Panics if `app` already has a route at the error path or `/health`.
pub fn create_router_with(app: Router<AppState>, state: AppState) -> Router {
    // Configure request tracing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    // Configure request timeout (30 seconds)
    let timeout_layer = TimeoutLayer::new(Duration::from_secs(30));

    let error_path = state.properties.error_page_path();
    let routes = app
        .route(&error_path, any(handlers::error_controller))
        .route("/health", get(handlers::health_check));

    let context_path = state.properties.context_path.as_str();
    let routes = if context_path.is_empty() {
        routes
    } else {
        Router::new().nest(context_path, routes)
    };

    let app = routes
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .with_state(state.clone());

    // Error pages are served by the router without the error page layer
    let dispatcher = ErrorDispatcher::new(state, app.clone());

    app.layer(middleware::from_fn_with_state(
        dispatcher,
        api_middleware::error_page_middleware,
    ))
    .layer(trace_layer)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
