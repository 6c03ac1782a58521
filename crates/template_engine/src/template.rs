use std::io::Write;

use tracing::debug;

use crate::errors::Error;
use crate::escape::escape_html;
use crate::evaluation::{stringify, EvaluationContext, ExpressionLanguage, PropertyPathLanguage};
use crate::registry::ExpressionRegistry;
use crate::scanner::{Placeholder, PlaceholderScanner, PlaceholderSyntax};

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

/// A compiled HTML template with `${...}` placeholders.
///
/// Compiling scans the template once and parses every distinct placeholder.
/// Rendering replays the scan against a fresh [`EvaluationContext`] and
/// substitutes each placeholder with its HTML-escaped value. Values that
/// cannot be resolved render as empty text.
///
/// A compiled template is immutable, so one instance can be shared between any
/// number of concurrent renders.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use template_engine::{EvaluationContext, Template};
///
/// let template = Template::new("<div>${message}</div>")?;
/// let context = EvaluationContext::from_value(json!({"message": "<b>oops</b>"}));
/// assert_eq!(template.render(&context), "<div>&lt;b&gt;oops&lt;/b&gt;</div>");
/// # Ok::<(), template_engine::Error>(())
/// ```
#[derive(Debug)]
pub struct Template<L: ExpressionLanguage = PropertyPathLanguage> {
    source: String,
    scanner: PlaceholderScanner,
    language: L,
    expressions: ExpressionRegistry<L::Expression>,
}

impl Template {
    /// Compile a template using the default `${` / `}` delimiters.
    pub fn new(source: impl Into<String>) -> Result<Self, Error> {
        Self::with_syntax(source, PlaceholderSyntax::default())
    }

    /// Compile a template using custom delimiters.
    pub fn with_syntax(source: impl Into<String>, syntax: PlaceholderSyntax) -> Result<Self, Error> {
        Template::with_language(source, syntax, PropertyPathLanguage)
    }
}

impl<L: ExpressionLanguage> Template<L> {
    /// Compile a template whose placeholders are parsed by `language`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpressionSyntax`] if any placeholder fails to parse.
    pub fn with_language(
        source: impl Into<String>,
        syntax: PlaceholderSyntax,
        language: L,
    ) -> Result<Self, Error> {
        let source = source.into();
        let scanner = PlaceholderScanner::new(syntax);
        let expressions = ExpressionRegistry::register(&source, &scanner, &language)?;

        Ok(Self {
            source,
            scanner,
            language,
            expressions,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn syntax(&self) -> &PlaceholderSyntax {
        self.scanner.syntax()
    }

    pub fn expressions(&self) -> &ExpressionRegistry<L::Expression> {
        &self.expressions
    }

    /// Render the template against `context`.
    pub fn render(&self, context: &EvaluationContext) -> String {
        self.scanner
            .scan(&self.source, |placeholder| self.resolve(placeholder, context))
    }

    /// Render the template and write the result to `writer`.
    ///
    /// # Errors
    ///
    /// Write failures are returned as [`Error::Io`].
    pub fn render_to<W: Write>(&self, context: &EvaluationContext, writer: &mut W) -> Result<(), Error> {
        let output = self.render(context);
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn resolve(&self, placeholder: &Placeholder<'_>, context: &EvaluationContext) -> Option<String> {
        let Some(expression) = self.expressions.get(placeholder.raw()) else {
            debug!(placeholder = placeholder.raw(), "No expression registered for placeholder");
            return None;
        };

        let value = self.language.evaluate(expression, context)?;
        Some(escape_html(&stringify(&value)).into_owned())
    }
}
