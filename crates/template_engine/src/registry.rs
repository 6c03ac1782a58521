use std::collections::HashMap;

use tracing::debug;

use crate::errors::Error;
use crate::evaluation::ExpressionLanguage;
use crate::scanner::PlaceholderScanner;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// The distinct placeholder expressions of one template, parsed once.
///
/// Expressions are keyed by the placeholder's raw inner text, so repeated
/// placeholders share a single parsed form. The registry is never modified
/// after [`register`](ExpressionRegistry::register) returns.
#[derive(Debug)]
pub struct ExpressionRegistry<E> {
    expressions: HashMap<String, E>,
}

impl<E> ExpressionRegistry<E> {
    /// Scan `template` once and parse every placeholder found in it.
    ///
    /// Nested placeholders are registered in their own right as well as being
    /// part of the placeholder that encloses them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpressionSyntax`] for the first placeholder that does
    /// not parse.
    pub fn register<L>(
        template: &str,
        scanner: &PlaceholderScanner,
        language: &L,
    ) -> Result<Self, Error>
    where
        L: ExpressionLanguage<Expression = E>,
    {
        let mut expressions = HashMap::new();
        let mut failure = None;

        // Hand every placeholder back unchanged so that enclosing placeholders
        // still see their nested tokens. The rebuilt text is discarded.
        scanner.scan(template, |placeholder| {
            let raw = placeholder.raw();
            if failure.is_none() && !expressions.contains_key(raw) {
                match language.parse(raw, scanner) {
                    Ok(expression) => {
                        expressions.insert(raw.to_string(), expression);
                    }
                    Err(e) => failure = Some(e),
                }
            }
            Some(scanner.syntax().wrap(raw))
        });

        if let Some(e) = failure {
            return Err(e);
        }

        debug!(
            expressions = expressions.len(),
            "Registered template placeholder expressions"
        );

        Ok(Self { expressions })
    }

    pub fn get(&self, raw: &str) -> Option<&E> {
        self.expressions.get(raw)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.expressions.contains_key(raw)
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Raw inner texts of the registered placeholders, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.expressions.keys().map(String::as_str)
    }
}
