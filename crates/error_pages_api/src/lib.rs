//! HTTP error handling for axum applications
//!
//! This crate wires the `error_pages` crate into an axum router:
//!
//! - An error controller at the configured error path (default `/error`)
//! - Middleware that replaces bare 4xx/5xx responses with rendered error pages
//! - HTML rendering through the configured error view, JSON otherwise
//! - Server configuration and startup with graceful shutdown
//!
//! # Architecture
//!
//! This crate only translates between HTTP and the error model. Deciding
//! what an error looks like belongs to `error_pages`; the dependency flows
//! HTTP layer → error handling, never the reverse.

use std::sync::Arc;

use error_pages::{
    resolve_error_view, DefaultErrorAttributes, ErrorAttributes, ErrorPageCustomizer, ErrorPages,
    ServerProperties, TemplateAvailabilityProvider, View,
};

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

// Re-export key types for convenience
pub use errors::{ApiError, ErrorResponse};
pub use server::{ApiConfig, ApiServer};

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Application state shared across handlers
///
/// Everything in here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Server and error handling settings
    pub properties: Arc<ServerProperties>,

    /// Builds the model for an error
    pub attributes: Arc<dyn ErrorAttributes>,

    /// View used for HTML error responses; JSON is used when absent
    pub error_view: Option<Arc<dyn View>>,

    /// Registered error pages
    pub error_pages: Arc<ErrorPages>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// The HTML error view is an `error` template from the first provider that
    /// has one, or the whitelabel page when enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the error view
    /// template cannot be loaded or compiled.
    pub fn new(
        properties: ServerProperties,
        providers: &[Box<dyn TemplateAvailabilityProvider>],
    ) -> Result<Self, error_pages::Error> {
        properties.validate()?;

        let error_view = resolve_error_view(&properties.error, providers)?
            .map(|view| Arc::new(view) as Arc<dyn View>);

        let customizer = ErrorPageCustomizer::new(&properties);
        let error_pages = ErrorPages::from_registrars(&[&customizer]);

        let attributes = DefaultErrorAttributes::new(properties.error.include_exception);

        Ok(Self {
            properties: Arc::new(properties),
            attributes: Arc::new(attributes),
            error_view,
            error_pages: Arc::new(error_pages),
        })
    }

    /// Replace the error attributes.
    pub fn with_attributes(mut self, attributes: Arc<dyn ErrorAttributes>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Replace the HTML error view.
    pub fn with_error_view(mut self, view: Option<Arc<dyn View>>) -> Self {
        self.error_view = view;
        self
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
