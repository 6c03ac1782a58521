use super::*;
use chrono::TimeZone;
use serde_json::json;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

#[test]
fn test_attributes_for_known_status() {
    let error = ErrorInfo::new(404)
        .with_message("Resource missing")
        .with_path("/things/1")
        .with_timestamp(fixed_time());

    let model = DefaultErrorAttributes::default().error_attributes(&error, false);

    assert_eq!(model["timestamp"], json!("2026-10-16T09:30:00+00:00"));
    assert_eq!(model["status"], json!(404));
    assert_eq!(model["error"], json!("Not Found"));
    assert_eq!(model["message"], json!("Resource missing"));
    assert_eq!(model["path"], json!("/things/1"));
    assert!(!model.contains_key("exception"));
    assert!(!model.contains_key("trace"));
}

#[test]
fn test_attributes_for_unknown_status() {
    let model = DefaultErrorAttributes::default().error_attributes(&ErrorInfo::unknown(), false);

    assert_eq!(model["status"], json!(999));
    assert_eq!(model["error"], json!("None"));
    assert_eq!(model["message"], json!("No message available"));
    assert!(!model.contains_key("path"));
}

#[test]
fn test_attributes_for_status_without_reason_phrase() {
    let model = DefaultErrorAttributes::default().error_attributes(&ErrorInfo::new(599), false);

    assert_eq!(model["status"], json!(599));
    assert_eq!(model["error"], json!("Http Status"));
}

#[test]
fn test_empty_message_uses_placeholder_text() {
    let error = ErrorInfo::new(500).with_message("");
    let model = DefaultErrorAttributes::default().error_attributes(&error, false);
    assert_eq!(model["message"], json!(NO_MESSAGE));
}

#[test]
fn test_exception_only_when_enabled() {
    let error = ErrorInfo::new(500).with_exception("std::io::Error");

    let hidden = DefaultErrorAttributes::new(false).error_attributes(&error, false);
    assert!(!hidden.contains_key("exception"));

    let shown = DefaultErrorAttributes::new(true).error_attributes(&error, false);
    assert_eq!(shown["exception"], json!("std::io::Error"));
}

#[test]
fn test_trace_only_when_requested() {
    let error = ErrorInfo::new(500).with_trace("at handler\nat router");

    let hidden = DefaultErrorAttributes::default().error_attributes(&error, false);
    assert!(!hidden.contains_key("trace"));

    let shown = DefaultErrorAttributes::default().error_attributes(&error, true);
    assert_eq!(shown["trace"], json!("at handler\nat router"));
}

#[test]
fn test_http_status() {
    assert_eq!(ErrorInfo::new(404).http_status(), StatusCode::NOT_FOUND);
    assert_eq!(
        ErrorInfo::unknown().http_status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ErrorInfo::new(42).http_status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_timestamp_defaults_to_now() {
    let before = Utc::now();
    let error = ErrorInfo::new(500);
    let after = Utc::now();

    assert!(error.timestamp >= before && error.timestamp <= after);
}
