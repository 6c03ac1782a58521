//! Tests for server module

use super::*;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
};
use tower::ServiceExt;

fn test_app_state() -> AppState {
    AppState::new(ServerProperties::default(), &[]).expect("default state should build")
}

#[test]
fn test_default_config() {
    let config = ApiConfig::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
fn test_socket_addr() {
    let config = ApiConfig {
        port: 9090,
        host: "127.0.0.1".to_string(),
    };
    assert_eq!(
        config.socket_addr().unwrap(),
        "127.0.0.1:9090".parse::<SocketAddr>().unwrap()
    );
}

#[test]
fn test_socket_addr_rejects_hostname() {
    let config = ApiConfig {
        port: 9090,
        host: "localhost.invalid".to_string(),
    };
    let err = config.socket_addr().unwrap_err();
    assert!(err.to_string().contains("localhost.invalid"));
}

#[test]
fn test_from_properties_builds_state() {
    let mut properties = ServerProperties::default();
    properties.error.path = "/oops".to_string();

    let server = ApiServer::from_properties(ApiConfig::default(), properties, &[]).unwrap();

    assert_eq!(server.state().properties.error.path, "/oops");
    assert!(server.state().error_view.is_some());
}

#[test]
fn test_from_properties_rejects_invalid_settings() {
    let mut properties = ServerProperties::default();
    properties.context_path = "shop/".to_string();

    let result = ApiServer::from_properties(ApiConfig::default(), properties, &[]);
    assert!(matches!(result, Err(error_pages::Error::Config(_))));
}

#[tokio::test]
async fn test_router_serves_application_routes_with_error_pages() {
    let routes = Router::new()
        .route("/orders", get(|| async { "orders" }))
        .route("/orders/:id", get(|| async { StatusCode::NOT_FOUND }));
    let server = ApiServer::new(ApiConfig::default(), test_app_state()).with_routes(routes);

    let request = Request::builder().uri("/orders").body(Body::empty()).unwrap();
    let response = server.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/orders/7")
        .body(Body::empty())
        .unwrap();
    let response = server.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["path"], "/orders/7");
}

#[tokio::test]
async fn test_serve_fails_on_invalid_host() {
    let config = ApiConfig {
        port: 0,
        host: "not an address".to_string(),
    };
    let server = ApiServer::new(config, test_app_state());
    assert!(server.serve().await.is_err());
}
