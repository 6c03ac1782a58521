//! HTTP server configuration and startup
//!
//! [`ApiServer`] serves an application router with error handling added
//! around it: the error controller, error page forwarding, tracing and
//! timeouts.

use axum::Router;
use error_pages::{ServerProperties, TemplateAvailabilityProvider};
use std::env;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tokio::signal;

use crate::{routes, AppState, DEFAULT_PORT};

/// Address the server binds to
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl ApiConfig {
    /// Read `API_HOST` and `API_PORT`, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is set but is not a port number.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match env::var("API_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid API_PORT '{}': {}", port, e))?,
            Err(_) => defaults.port,
        };
        let host = env::var("API_HOST").unwrap_or(defaults.host);

        Ok(Self { port, host })
    }

    /// The socket address to bind to.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let host: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid host '{}': {}", self.host, e))?;
        Ok(SocketAddr::from((host, self.port)))
    }
}

/// Error handling server
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
    routes: Router<AppState>,
}

impl ApiServer {
    /// Create a server with no application routes of its own.
    pub fn new(config: ApiConfig, state: AppState) -> Self {
        Self {
            config,
            state,
            routes: Router::new(),
        }
    }

    /// Create a server from error handling settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the error view cannot
    /// be loaded.
    pub fn from_properties(
        config: ApiConfig,
        properties: ServerProperties,
        providers: &[Box<dyn TemplateAvailabilityProvider>],
    ) -> Result<Self, error_pages::Error> {
        let state = AppState::new(properties, providers)?;
        Ok(Self::new(config, state))
    }

    /// Serve `routes` alongside the error controller.
    pub fn with_routes(mut self, routes: Router<AppState>) -> Self {
        self.routes = routes;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the Axum router with all routes and middleware.
    pub fn router(&self) -> Router {
        routes::create_router_with(self.routes.clone(), self.state.clone())
    }

    /// Start the server and listen for requests.
    ///
    /// This method blocks until the server is shut down gracefully via
    /// CTRL+C (SIGINT) or SIGTERM signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.socket_addr()?;
        let properties = &self.state.properties;

        tracing::info!(
            address = %addr,
            context_path = %properties.context_path,
            error_path = %properties.error_page_path(),
            html_errors = self.state.error_view.is_some(),
            "Starting error pages server"
        );

        let listener = TcpListener::bind(addr).await?;
        let app = self.router();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Resolves on CTRL+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received CTRL+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
