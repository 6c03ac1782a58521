//! Error page registration.
//!
//! Registrars contribute [`ErrorPage`]s to a registry that the HTTP layer
//! consults when a request ends in an error status.

use std::collections::HashMap;

use tracing::debug;

use crate::config::ServerProperties;

#[cfg(test)]
#[path = "error_page_tests.rs"]
mod tests;

/// A path to render errors at, for one status or for all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    status: Option<u16>,
    path: String,
}

impl ErrorPage {
    /// A page used for every error without a status-specific page.
    pub fn global(path: impl Into<String>) -> Self {
        Self {
            status: None,
            path: path.into(),
        }
    }

    pub fn for_status(status: u16, path: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            path: path.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_global(&self) -> bool {
        self.status.is_none()
    }
}

/// Accepts error pages.
pub trait ErrorPageRegistry {
    fn add_error_pages(&mut self, pages: Vec<ErrorPage>);
}

/// Contributes error pages to a registry.
pub trait ErrorPageRegistrar: Send + Sync {
    fn register_error_pages(&self, registry: &mut dyn ErrorPageRegistry);

    /// Registrars run in ascending order; later registrations win.
    fn order(&self) -> i32 {
        0
    }
}

/// Registers the error controller as the global error page.
#[derive(Debug, Clone)]
pub struct ErrorPageCustomizer {
    path: String,
}

impl ErrorPageCustomizer {
    pub fn new(properties: &ServerProperties) -> Self {
        Self {
            path: properties.error_page_path(),
        }
    }
}

impl ErrorPageRegistrar for ErrorPageCustomizer {
    fn register_error_pages(&self, registry: &mut dyn ErrorPageRegistry) {
        registry.add_error_pages(vec![ErrorPage::global(self.path.clone())]);
    }
}

/// Registered error pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPages {
    global: Option<ErrorPage>,
    by_status: HashMap<u16, ErrorPage>,
}

impl ErrorPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the pages of every registrar, lowest order first.
    pub fn from_registrars(registrars: &[&dyn ErrorPageRegistrar]) -> Self {
        let mut ordered = registrars.to_vec();
        ordered.sort_by_key(|registrar| registrar.order());

        let mut pages = Self::new();
        for registrar in ordered {
            registrar.register_error_pages(&mut pages);
        }
        pages
    }

    /// The page for `status`, falling back to the global page.
    pub fn resolve(&self, status: u16) -> Option<&ErrorPage> {
        self.by_status.get(&status).or(self.global.as_ref())
    }

    pub fn global(&self) -> Option<&ErrorPage> {
        self.global.as_ref()
    }

    pub fn len(&self) -> usize {
        self.by_status.len() + usize::from(self.global.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorPageRegistry for ErrorPages {
    fn add_error_pages(&mut self, pages: Vec<ErrorPage>) {
        for page in pages {
            debug!(status = ?page.status, path = %page.path, "Registering error page");
            match page.status {
                Some(status) => {
                    self.by_status.insert(status, page);
                }
                None => self.global = Some(page),
            }
        }
    }
}
