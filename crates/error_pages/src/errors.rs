use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for error page configuration and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error view template could not be compiled or rendered.
    #[error("Template error: {0}")]
    Template(#[from] template_engine::Error),

    /// Reading a template or writing a rendered view failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
