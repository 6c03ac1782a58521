//! Placeholder templates for HTML error pages.
//!
//! A [`Template`] is an HTML fragment with `${...}` placeholders. Each
//! placeholder holds a property path (`status`, `error.message`,
//! `errors[0].field`) that is looked up in the model at render time.
//!
//! The crate is split along the stages of rendering:
//!
//! - [`scanner`]: finds placeholders, including nested ones, without regexes
//! - [`registry`]: parses the distinct placeholders of a template once
//! - [`evaluation`]: evaluates parsed expressions against a per-render context
//! - [`template`]: compiles a template and renders it with HTML escaping
//!
//! Malformed placeholders are rejected when the template is compiled. Missing
//! model values are not errors; they render as empty text.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use template_engine::{EvaluationContext, Template};
//!
//! let template = Template::new("<p>${error} (${status})</p>")?;
//! let context = EvaluationContext::from_value(json!({
//!     "error": "Not Found",
//!     "status": 404,
//! }));
//!
//! assert_eq!(template.render(&context), "<p>Not Found (404)</p>");
//! # Ok::<(), template_engine::Error>(())
//! ```

mod errors;
pub mod escape;
pub mod evaluation;
pub mod expression;
pub mod registry;
pub mod scanner;
pub mod template;

pub use errors::Error;
pub use escape::escape_html;
pub use evaluation::{stringify, EvaluationContext, ExpressionLanguage, PropertyPathLanguage};
pub use expression::{PropertyPath, Segment};
pub use registry::ExpressionRegistry;
pub use scanner::{Placeholder, PlaceholderScanner, PlaceholderSyntax};
pub use template::Template;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
