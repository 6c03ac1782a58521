use super::*;
use serde_json::json;

fn evaluate(text: &str, context: &EvaluationContext) -> Option<Value> {
    let language = PropertyPathLanguage;
    let expression = language
        .parse(text, &PlaceholderScanner::default())
        .expect("expression should parse");
    language.evaluate(&expression, context)
}

#[test]
fn test_context_from_object_value() {
    let context = EvaluationContext::from_value(json!({"status": 500}));
    assert_eq!(context.get("status"), Some(&json!(500)));
}

#[test]
fn test_context_from_non_object_value_is_empty() {
    let context = EvaluationContext::from_value(json!(["not", "a", "map"]));
    assert!(context.root().is_empty());
}

#[test]
fn test_with_attribute_overrides_model_value() {
    let context = EvaluationContext::from_value(json!({"path": "/from-model"}))
        .with_attribute("path", "/from-request");
    assert_eq!(context.get("path"), Some(&json!("/from-request")));
}

#[test]
fn test_evaluate_nested_mapping() {
    let context = EvaluationContext::from_value(json!({"error": {"message": "boom"}}));
    assert_eq!(evaluate("error.message", &context), Some(json!("boom")));
}

#[test]
fn test_evaluate_missing_is_none() {
    let context = EvaluationContext::default();
    assert_eq!(evaluate("missing", &context), None);
    assert_eq!(evaluate("missing.deeper", &context), None);
}

#[test]
fn test_evaluate_returns_raw_value() {
    let context = EvaluationContext::from_value(json!({"error": {"code": 404}}));
    assert_eq!(evaluate("error.code", &context), Some(json!(404)));
    assert_eq!(evaluate("error", &context), Some(json!({"code": 404})));
}

#[test]
fn test_stringify_scalars() {
    assert_eq!(stringify(&json!("text")), "text");
    assert_eq!(stringify(&json!(404)), "404");
    assert_eq!(stringify(&json!(1.5)), "1.5");
    assert_eq!(stringify(&json!(true)), "true");
    assert_eq!(stringify(&Value::Null), "");
}

#[test]
fn test_stringify_collections_as_json() {
    assert_eq!(stringify(&json!(["a", 1])), r#"["a",1]"#);
    assert_eq!(stringify(&json!({"k": "v"})), r#"{"k":"v"}"#);
}

#[test]
fn test_stringify_borrows_strings() {
    let value = json!("borrowed");
    assert!(matches!(stringify(&value), Cow::Borrowed(_)));
}
