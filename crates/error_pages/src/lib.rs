//! Error handling for HTTP applications.
//!
//! This crate decides how errors are reported, independent of any HTTP
//! framework:
//!
//! - [`config`]: error handling settings, loaded from TOML
//! - [`attributes`]: the model describing an error (`status`, `error`, `message`, ...)
//! - [`view`]: views that render that model, backed by placeholder templates
//! - [`whitelabel`]: picks a custom `error` template or the built-in fallback page
//! - [`error_page`]: registers where errors are rendered
//!
//! # Examples
//!
//! ```rust
//! use error_pages::{
//!     resolve_error_view, BufferedResponse, DefaultErrorAttributes, ErrorAttributes, ErrorInfo,
//!     RequestContext, ServerProperties, View,
//! };
//!
//! let properties = ServerProperties::default();
//! let view = resolve_error_view(&properties.error, &[])?.expect("whitelabel page");
//!
//! let error = ErrorInfo::new(404).with_path("/missing");
//! let model = DefaultErrorAttributes::default().error_attributes(&error, false);
//!
//! let mut response = BufferedResponse::new();
//! view.render(&model, &RequestContext::default(), &mut response)?;
//! assert!(response.body().contains("type=Not Found, status=404"));
//! # Ok::<(), error_pages::Error>(())
//! ```

pub mod attributes;
pub mod config;
pub mod error_page;
mod errors;
pub mod view;
pub mod whitelabel;

pub use attributes::{DefaultErrorAttributes, ErrorAttributes, ErrorInfo, Model};
pub use config::{ErrorProperties, IncludeStacktrace, ServerProperties, WhitelabelProperties};
pub use error_page::{
    ErrorPage, ErrorPageCustomizer, ErrorPageRegistrar, ErrorPageRegistry, ErrorPages,
};
pub use errors::Error;
pub use view::{BufferedResponse, RequestContext, TemplateView, View, ViewResponse, TEXT_HTML};
pub use whitelabel::{
    resolve_error_view, whitelabel_error_view, DirectoryTemplateProvider,
    TemplateAvailabilityProvider, ERROR_VIEW_NAME, WHITELABEL_TEMPLATE,
};
