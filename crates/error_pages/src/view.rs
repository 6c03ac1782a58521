//! Views render an error model into a response body.

use std::io;

use template_engine::{EvaluationContext, Template};

use crate::attributes::Model;
use crate::errors::Error;

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;

/// Content type of HTML error views.
pub const TEXT_HTML: &str = "text/html";

/// The parts of the current request a view may use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    context_path: String,
}

impl RequestContext {
    pub fn new(context_path: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
        }
    }

    /// Path the application is mounted under; empty for the root.
    pub fn context_path(&self) -> &str {
        &self.context_path
    }
}

/// The response a view writes to.
pub trait ViewResponse {
    fn content_type(&self) -> Option<&str>;

    fn set_content_type(&mut self, content_type: &str);

    fn write_str(&mut self, body: &str) -> io::Result<()>;
}

/// A response held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    content_type: Option<String>,
    body: String,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// A response whose content type was already chosen by the caller.
    pub fn with_content_type(content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            body: String::new(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_parts(self) -> (Option<String>, String) {
        (self.content_type, self.body)
    }
}

impl ViewResponse for BufferedResponse {
    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    fn write_str(&mut self, body: &str) -> io::Result<()> {
        self.body.push_str(body);
        Ok(())
    }
}

/// Renders an error model.
pub trait View: Send + Sync {
    /// Content type set on the response when the caller has not set one.
    fn content_type(&self) -> &str;

    /// Render `model` for `request` into `response`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the response rejects the write.
    fn render(
        &self,
        model: &Model,
        request: &RequestContext,
        response: &mut dyn ViewResponse,
    ) -> Result<(), Error>;
}

/// An HTML view backed by a placeholder [`Template`].
///
/// The model is rendered with an extra `path` attribute holding the request's
/// context path. Placeholder values are HTML-escaped.
#[derive(Debug)]
pub struct TemplateView {
    template: Template,
}

impl TemplateView {
    /// Compile `source` into a view.
    ///
    /// # Errors
    ///
    /// Returns `Error::Template` if a placeholder in `source` is malformed.
    pub fn new(source: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            template: Template::new(source)?,
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}

impl From<Template> for TemplateView {
    fn from(template: Template) -> Self {
        Self { template }
    }
}

impl View for TemplateView {
    fn content_type(&self) -> &str {
        TEXT_HTML
    }

    fn render(
        &self,
        model: &Model,
        request: &RequestContext,
        response: &mut dyn ViewResponse,
    ) -> Result<(), Error> {
        if response.content_type().is_none() {
            response.set_content_type(self.content_type());
        }

        let context = EvaluationContext::new(model.clone())
            .with_attribute("path", request.context_path());
        let output = self.template.render(&context);
        response.write_str(&output)?;

        Ok(())
    }
}
