//! Error handling configuration.
//!
//! Settings are passed explicitly to the components that need them instead of
//! being read from shared global state. They can be loaded from a TOML file;
//! every key is optional and falls back to its default.
//!
//! # Example TOML Configuration
//!
//! ```toml
//! context_path = "/app"
//! servlet_path = "/"
//!
//! [error]
//! path = "/error"
//! include_stacktrace = "on_trace_param"
//! include_exception = false
//!
//! [error.whitelabel]
//! enabled = true
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Default path of the error controller.
pub const DEFAULT_ERROR_PATH: &str = "/error";

/// When to add a stack trace to the error attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeStacktrace {
    /// Never include a stack trace.
    #[default]
    Never,
    /// Always include a stack trace.
    Always,
    /// Include a stack trace when the request asks for one with `?trace=true`.
    OnTraceParam,
}

/// Settings of the fallback error page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitelabelProperties {
    /// Whether the whitelabel page is used when no error template exists.
    pub enabled: bool,
}

impl Default for WhitelabelProperties {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Error handling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorProperties {
    /// Path of the error controller.
    pub path: String,

    /// When to include the `trace` attribute.
    pub include_stacktrace: IncludeStacktrace,

    /// Whether to include the `exception` attribute.
    pub include_exception: bool,

    /// Fallback error page settings.
    pub whitelabel: WhitelabelProperties,
}

impl Default for ErrorProperties {
    fn default() -> Self {
        Self {
            path: DEFAULT_ERROR_PATH.to_string(),
            include_stacktrace: IncludeStacktrace::default(),
            include_exception: false,
            whitelabel: WhitelabelProperties::default(),
        }
    }
}

impl ErrorProperties {
    /// Whether a response should carry a stack trace.
    pub fn should_include_stacktrace(&self, trace_requested: bool) -> bool {
        match self.include_stacktrace {
            IncludeStacktrace::Never => false,
            IncludeStacktrace::Always => true,
            IncludeStacktrace::OnTraceParam => trace_requested,
        }
    }
}

/// Server settings relevant to error handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerProperties {
    /// Path the application is mounted under, e.g. `/app`. Empty for the root.
    pub context_path: String,

    /// Path the request dispatcher is mapped to, e.g. `/` or `/api/*`.
    pub servlet_path: String,

    /// Error handling settings.
    pub error: ErrorProperties,
}

impl Default for ServerProperties {
    fn default() -> Self {
        Self {
            context_path: String::new(),
            servlet_path: "/".to_string(),
            error: ErrorProperties::default(),
        }
    }
}

impl ServerProperties {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if:
    /// - The specified file does not exist
    /// - The file cannot be read
    /// - The file contains invalid TOML or does not match the schema
    /// - The loaded values fail validation
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading error handling configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let properties: ServerProperties = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        properties.validate()?;
        Ok(properties)
    }

    /// Checks that configured paths are usable as routes.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.error.path.starts_with('/') {
            return Err(Error::Config(format!(
                "Error path must start with '/': {}",
                self.error.path
            )));
        }

        if !self.context_path.is_empty()
            && (!self.context_path.starts_with('/') || self.context_path.ends_with('/'))
        {
            return Err(Error::Config(format!(
                "Context path must start with '/' and must not end with '/': {}",
                self.context_path
            )));
        }

        Ok(())
    }

    /// The servlet path without a trailing `/` or `/*`.
    pub fn servlet_prefix(&self) -> &str {
        let path = self.servlet_path.trim_end_matches('*');
        path.trim_end_matches('/')
    }

    /// Path the global error page is registered under.
    pub fn error_page_path(&self) -> String {
        format!("{}{}", self.servlet_prefix(), self.error.path)
    }
}
