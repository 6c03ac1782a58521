//! Choosing the HTML error view.
//!
//! An application can supply its own `error` template through a
//! [`TemplateAvailabilityProvider`]. When none does and the whitelabel page is
//! enabled, the built-in [`WHITELABEL_TEMPLATE`] is used instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ErrorProperties;
use crate::errors::Error;
use crate::view::TemplateView;

#[cfg(test)]
#[path = "whitelabel_tests.rs"]
mod tests;

/// Name of the view that renders errors.
pub const ERROR_VIEW_NAME: &str = "error";

/// The fallback error page.
pub const WHITELABEL_TEMPLATE: &str = concat!(
    "<html><body><h1>Whitelabel Error Page</h1>",
    "<p>This application has no explicit mapping for /error, so you are seeing this as a fallback.</p>",
    "<div id='created'>${timestamp}</div>",
    "<div>There was an unexpected error (type=${error}, status=${status}).</div>",
    "<div>${message}</div></body></html>"
);

/// A source of view templates.
pub trait TemplateAvailabilityProvider: Send + Sync {
    /// Short description used in log messages.
    fn name(&self) -> &str;

    fn is_template_available(&self, view: &str) -> bool;

    /// Load the template for `view`, if this provider has one.
    fn load_template(&self, view: &str) -> Result<Option<String>, Error>;
}

/// Looks up `<root>/<view>.html` on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateProvider {
    root: PathBuf,
    name: String,
}

impl DirectoryTemplateProvider {
    /// Template file extension.
    pub const SUFFIX: &'static str = ".html";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = format!("directory {}", root.display());
        Self { root, name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn template_path(&self, view: &str) -> PathBuf {
        self.root.join(format!("{view}{}", Self::SUFFIX))
    }
}

impl TemplateAvailabilityProvider for DirectoryTemplateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_template_available(&self, view: &str) -> bool {
        self.template_path(view).is_file()
    }

    fn load_template(&self, view: &str) -> Result<Option<String>, Error> {
        let path = self.template_path(view);
        if !path.is_file() {
            return Ok(None);
        }

        debug!("Loading {} template from {:?}", view, path);
        Ok(Some(fs::read_to_string(path)?))
    }
}

/// Whether a provider already supplies an `error` template.
pub fn find_error_template<'a>(
    providers: &'a [Box<dyn TemplateAvailabilityProvider>],
) -> Option<&'a dyn TemplateAvailabilityProvider> {
    providers
        .iter()
        .map(|provider| provider.as_ref())
        .find(|provider| provider.is_template_available(ERROR_VIEW_NAME))
}

/// The whitelabel view, or `None` when it should not be used.
///
/// The whitelabel page is not used when it is disabled or when any provider
/// has an `error` template of its own.
pub fn whitelabel_error_view(
    properties: &ErrorProperties,
    providers: &[Box<dyn TemplateAvailabilityProvider>],
) -> Result<Option<TemplateView>, Error> {
    if !properties.whitelabel.enabled {
        debug!("Whitelabel error page disabled");
        return Ok(None);
    }

    if let Some(provider) = find_error_template(providers) {
        debug!(
            "Template from {} found for error view, not using whitelabel page",
            provider.name()
        );
        return Ok(None);
    }

    debug!("No error template view detected, using whitelabel page");
    Ok(Some(TemplateView::new(WHITELABEL_TEMPLATE)?))
}

/// The view used to render errors as HTML.
///
/// Prefers an `error` template from the first provider that has one, then the
/// whitelabel page. Returns `None` when neither applies.
///
/// # Errors
///
/// Returns an error if the chosen template cannot be read or compiled.
pub fn resolve_error_view(
    properties: &ErrorProperties,
    providers: &[Box<dyn TemplateAvailabilityProvider>],
) -> Result<Option<TemplateView>, Error> {
    if let Some(provider) = find_error_template(providers) {
        if let Some(source) = provider.load_template(ERROR_VIEW_NAME)? {
            info!("Using error template from {}", provider.name());
            return Ok(Some(TemplateView::new(source)?));
        }
    }

    let view = whitelabel_error_view(properties, providers)?;
    if view.is_none() {
        info!("No HTML error view configured, errors will be rendered as JSON");
    }
    Ok(view)
}
