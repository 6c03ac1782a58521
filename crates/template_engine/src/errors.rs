use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types that can occur while compiling or rendering a template.
///
/// Only construction can fail on the template's own account: a placeholder
/// whose inner text is not a valid expression is rejected before the template
/// is ever rendered. Rendering treats missing data as empty output, so the
/// only render-time failure is the sink refusing the write.
///
/// # Examples
///
/// ```rust
/// use template_engine::{Error, Template};
///
/// match Template::new("<div>${error..message}</div>") {
///     Err(Error::ExpressionSyntax { expression, .. }) => {
///         assert_eq!(expression, "error..message");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Writing rendered output to the caller's sink failed.
    ///
    /// The underlying `std::io::Error` is passed through unchanged.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A placeholder's inner text could not be parsed as an expression.
    ///
    /// Raised while the template is being compiled, which makes the template
    /// unusable until it is fixed.
    #[error("Invalid expression '{expression}': {reason}")]
    ExpressionSyntax {
        /// The raw inner text of the offending placeholder
        expression: String,
        /// Description of what is wrong with the expression
        reason: String,
    },

    /// The placeholder delimiters are unusable.
    #[error("Invalid placeholder syntax: {0}")]
    InvalidSyntax(String),
}

impl Error {
    pub(crate) fn expression_syntax(expression: &str, reason: impl Into<String>) -> Self {
        Error::ExpressionSyntax {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}
