use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_server_properties_default() {
    let properties = ServerProperties::default();

    assert_eq!(properties.context_path, "");
    assert_eq!(properties.servlet_path, "/");
    assert_eq!(properties.error.path, "/error");
    assert_eq!(properties.error.include_stacktrace, IncludeStacktrace::Never);
    assert!(!properties.error.include_exception);
    assert!(properties.error.whitelabel.enabled);
}

#[test]
fn test_from_toml_str_empty_uses_defaults() {
    let properties = ServerProperties::from_toml_str("").expect("empty config should parse");
    assert_eq!(properties, ServerProperties::default());
}

#[test]
fn test_from_toml_str_full() {
    let content = r#"
context_path = "/app"
servlet_path = "/api/*"

[error]
path = "/oops"
include_stacktrace = "on_trace_param"
include_exception = true

[error.whitelabel]
enabled = false
"#;

    let properties = ServerProperties::from_toml_str(content).expect("config should parse");

    assert_eq!(properties.context_path, "/app");
    assert_eq!(properties.servlet_path, "/api/*");
    assert_eq!(properties.error.path, "/oops");
    assert_eq!(
        properties.error.include_stacktrace,
        IncludeStacktrace::OnTraceParam
    );
    assert!(properties.error.include_exception);
    assert!(!properties.error.whitelabel.enabled);
}

#[test]
fn test_from_toml_str_partial_error_section() {
    let properties = ServerProperties::from_toml_str("[error]\ninclude_exception = true\n").unwrap();

    assert_eq!(properties.error.path, DEFAULT_ERROR_PATH);
    assert!(properties.error.include_exception);
    assert!(properties.error.whitelabel.enabled);
}

#[test]
fn test_from_toml_str_invalid_toml() {
    let result = ServerProperties::from_toml_str("invalid = toml = syntax");

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Failed to parse configuration file"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_from_toml_str_unknown_stacktrace_mode() {
    let result = ServerProperties::from_toml_str("[error]\ninclude_stacktrace = \"sometimes\"\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_validate_rejects_relative_error_path() {
    let result = ServerProperties::from_toml_str("[error]\npath = \"error\"\n");

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Error path must start with '/'"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_validate_rejects_bad_context_path() {
    assert!(ServerProperties::from_toml_str("context_path = \"app\"").is_err());
    assert!(ServerProperties::from_toml_str("context_path = \"/app/\"").is_err());
    assert!(ServerProperties::from_toml_str("context_path = \"/app\"").is_ok());
}

#[test]
fn test_load_nonexistent_file() {
    let result = ServerProperties::load(&PathBuf::from("nonexistent_error_pages.toml"));

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Configuration file not found"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("error_pages.toml");
    fs::write(&config_path, "[error]\npath = \"/failure\"\n").expect("Failed to write config");

    let properties = ServerProperties::load(&config_path).expect("Failed to load config");
    assert_eq!(properties.error.path, "/failure");
}

#[test]
fn test_servlet_prefix_strips_trailing_markers() {
    let mut properties = ServerProperties::default();
    assert_eq!(properties.servlet_prefix(), "");

    properties.servlet_path = "/api/*".to_string();
    assert_eq!(properties.servlet_prefix(), "/api");

    properties.servlet_path = "/api/".to_string();
    assert_eq!(properties.servlet_prefix(), "/api");

    properties.servlet_path = "/api".to_string();
    assert_eq!(properties.servlet_prefix(), "/api");
}

#[test]
fn test_error_page_path_combines_prefix_and_error_path() {
    let mut properties = ServerProperties::default();
    assert_eq!(properties.error_page_path(), "/error");

    properties.servlet_path = "/dispatch/*".to_string();
    properties.error.path = "/problem".to_string();
    assert_eq!(properties.error_page_path(), "/dispatch/problem");
}

#[test]
fn test_should_include_stacktrace() {
    let mut error = ErrorProperties::default();
    assert!(!error.should_include_stacktrace(true));

    error.include_stacktrace = IncludeStacktrace::Always;
    assert!(error.should_include_stacktrace(false));

    error.include_stacktrace = IncludeStacktrace::OnTraceParam;
    assert!(error.should_include_stacktrace(true));
    assert!(!error.should_include_stacktrace(false));
}
