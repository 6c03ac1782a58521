//! Error pages API server
//!
//! Serves the error controller and health check with error page handling.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `RUST_LOG`: Log level (default: info)
//! - `ERROR_PAGES_CONFIG`: Path to a TOML file with server and error settings
//! - `ERROR_TEMPLATES_DIR`: Directory searched for a custom `error.html`

use std::{env, path::PathBuf};

use anyhow::Context;
use error_pages::{DirectoryTemplateProvider, ServerProperties, TemplateAvailabilityProvider};
use error_pages_api::{ApiConfig, ApiServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = ApiConfig::from_env()?;

    let properties = match env::var("ERROR_PAGES_CONFIG") {
        Ok(path) => ServerProperties::load(&PathBuf::from(path))?,
        Err(_) => ServerProperties::default(),
    };

    let mut providers: Vec<Box<dyn TemplateAvailabilityProvider>> = Vec::new();
    if let Ok(dir) = env::var("ERROR_TEMPLATES_DIR") {
        providers.push(Box::new(DirectoryTemplateProvider::new(dir)));
    }

    let server = ApiServer::from_properties(config, properties, &providers)
        .context("Failed to configure error handling")?;

    // Start server with graceful shutdown
    server.serve().await
}
