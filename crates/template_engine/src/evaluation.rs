//! Expression evaluation against a per-render context.

use std::borrow::Cow;
use std::fmt::Debug;

use serde_json::{Map, Value};

use crate::errors::Error;
use crate::expression::PropertyPath;
use crate::scanner::PlaceholderScanner;

#[cfg(test)]
#[path = "evaluation_tests.rs"]
mod tests;

/// The variables a template is rendered against.
///
/// The context has a single root mapping. Expressions look names up in it and
/// descend into nested mappings and lists from there. A context is built per
/// render and dropped afterwards.
///
/// ```rust
/// use serde_json::json;
/// use template_engine::EvaluationContext;
///
/// let context = EvaluationContext::from_value(json!({"status": 404}))
///     .with_attribute("path", "/missing");
/// assert_eq!(context.get("path"), Some(&json!("/missing")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationContext {
    root: Map<String, Value>,
}

impl EvaluationContext {
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Build a context from a JSON value.
    ///
    /// Objects become the root mapping. Any other value yields an empty context.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    /// Add or replace a top-level attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.root.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }
}

impl From<Map<String, Value>> for EvaluationContext {
    fn from(root: Map<String, Value>) -> Self {
        Self::new(root)
    }
}

/// A grammar for placeholder expressions.
///
/// Templates parse every distinct placeholder once through
/// [`parse`](ExpressionLanguage::parse) and evaluate the parsed form on each
/// render. Evaluation never fails: anything that cannot be resolved is `None`.
pub trait ExpressionLanguage: Send + Sync {
    /// Parsed form of a placeholder's inner text.
    type Expression: Debug + Send + Sync;

    /// Parse the raw inner text of a placeholder.
    ///
    /// `scanner` carries the template's delimiters so nested placeholders can
    /// be recognised inside the expression.
    fn parse(&self, text: &str, scanner: &PlaceholderScanner) -> Result<Self::Expression, Error>;

    /// Evaluate a parsed expression.
    fn evaluate(&self, expression: &Self::Expression, context: &EvaluationContext)
        -> Option<Value>;
}

/// Dotted property paths into nested mappings.
///
/// See [`PropertyPath`] for the accepted syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyPathLanguage;

impl ExpressionLanguage for PropertyPathLanguage {
    type Expression = PropertyPath;

    fn parse(&self, text: &str, scanner: &PlaceholderScanner) -> Result<PropertyPath, Error> {
        PropertyPath::parse(text, scanner)
    }

    fn evaluate(&self, expression: &PropertyPath, context: &EvaluationContext) -> Option<Value> {
        expression.resolve(context.root()).cloned()
    }
}

/// Convert an evaluated value into the text substituted into a template.
///
/// Strings are used as-is, `null` becomes empty, and lists and mappings are
/// written as compact JSON.
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(text) => Cow::Borrowed(text),
        Value::Bool(flag) => Cow::Owned(flag.to_string()),
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}
