use super::*;

/// Registrar that registers fixed pages with a fixed order.
struct FixedRegistrar {
    pages: Vec<ErrorPage>,
    order: i32,
}

impl ErrorPageRegistrar for FixedRegistrar {
    fn register_error_pages(&self, registry: &mut dyn ErrorPageRegistry) {
        registry.add_error_pages(self.pages.clone());
    }

    fn order(&self) -> i32 {
        self.order
    }
}

#[test]
fn test_customizer_registers_global_error_page() {
    let customizer = ErrorPageCustomizer::new(&ServerProperties::default());
    let pages = ErrorPages::from_registrars(&[&customizer]);

    assert_eq!(pages.len(), 1);
    assert_eq!(pages.global(), Some(&ErrorPage::global("/error")));
    assert_eq!(customizer.order(), 0);
}

#[test]
fn test_customizer_uses_servlet_prefix() {
    let mut properties = ServerProperties::default();
    properties.servlet_path = "/dispatch/*".to_string();
    properties.error.path = "/failure".to_string();

    let pages = ErrorPages::from_registrars(&[&ErrorPageCustomizer::new(&properties)]);

    assert_eq!(pages.global().map(ErrorPage::path), Some("/dispatch/failure"));
}

#[test]
fn test_resolve_prefers_status_specific_page() {
    let mut pages = ErrorPages::new();
    pages.add_error_pages(vec![
        ErrorPage::global("/error"),
        ErrorPage::for_status(404, "/not-found"),
    ]);

    assert_eq!(pages.resolve(404).map(ErrorPage::path), Some("/not-found"));
    assert_eq!(pages.resolve(500).map(ErrorPage::path), Some("/error"));
}

#[test]
fn test_resolve_without_pages() {
    let pages = ErrorPages::new();
    assert!(pages.is_empty());
    assert!(pages.resolve(500).is_none());
}

#[test]
fn test_registrars_run_in_order_and_later_wins() {
    let late = FixedRegistrar {
        pages: vec![ErrorPage::global("/late")],
        order: 10,
    };
    let early = FixedRegistrar {
        pages: vec![ErrorPage::global("/early"), ErrorPage::for_status(404, "/missing")],
        order: -10,
    };

    let pages = ErrorPages::from_registrars(&[&late, &early]);

    assert_eq!(pages.global().map(ErrorPage::path), Some("/late"));
    assert_eq!(pages.resolve(404).map(ErrorPage::path), Some("/missing"));
    assert_eq!(pages.len(), 2);
}

#[test]
fn test_error_page_accessors() {
    let global = ErrorPage::global("/error");
    assert!(global.is_global());
    assert_eq!(global.status(), None);

    let specific = ErrorPage::for_status(503, "/maintenance");
    assert!(!specific.is_global());
    assert_eq!(specific.status(), Some(503));
    assert_eq!(specific.path(), "/maintenance");
}
