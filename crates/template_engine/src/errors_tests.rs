use super::*;
use std::io;

#[test]
fn test_error_debug_format() {
    let error = Error::expression_syntax("a..b", "empty path segment");
    let debug_output = format!("{error:?}");
    assert!(debug_output.contains("ExpressionSyntax"));
    assert!(debug_output.contains("a..b"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

#[test]
fn test_expression_syntax_error_display() {
    let error = Error::ExpressionSyntax {
        expression: "error.".to_string(),
        reason: "empty path segment at position 6".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid expression 'error.': empty path segment at position 6"
    );
}

#[test]
fn test_invalid_syntax_error_display() {
    let error = Error::InvalidSyntax("prefix must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid placeholder syntax: prefix must not be empty"
    );
}

#[test]
fn test_io_error_display() {
    let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "connection closed");
    let error = Error::Io(io_error);
    assert_eq!(error.to_string(), "IO error: connection closed");
}

#[test]
fn test_io_error_from_conversion() {
    let io_error = io::Error::new(io::ErrorKind::WriteZero, "sink full");
    let error: Error = io_error.into();
    assert!(matches!(error, Error::Io(_)));
}
