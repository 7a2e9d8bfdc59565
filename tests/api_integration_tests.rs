//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lookaside::{api::create_router, AppState, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_state() -> AppState {
    AppState::from_config(&ServerConfig::default()).unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == SET / GET ==

#[tokio::test]
async fn test_set_then_get_json_value() {
    let app = create_router(create_state());

    let (status, json) = send(
        &app,
        "PUT",
        "/api/set",
        Some(r#"{"key":"procurement:dashboard","value":{"pending":4,"suppliers":["a","b"]}}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("procurement:dashboard"));

    let (status, json) = send(&app, "GET", "/api/get/procurement:dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "procurement:dashboard");
    assert_eq!(json["value"]["pending"], 4);
    assert_eq!(json["value"]["suppliers"][1], "b");
}

#[tokio::test]
async fn test_set_empty_key_rejected() {
    let app = create_router(create_state());

    let (status, json) = send(&app, "PUT", "/ui/set", Some(r#"{"key":"","value":1}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_get_missing_key() {
    let app = create_router(create_state());

    let (status, json) = send(&app, "GET", "/ui/get/nothing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nothing"));
}

#[tokio::test]
async fn test_caches_are_isolated() {
    let app = create_router(create_state());

    send(&app, "PUT", "/api/set", Some(r#"{"key":"k","value":1}"#)).await;

    let (status, _) = send(&app, "GET", "/ui/get/k", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn test_expired_key_not_returned() {
    let app = create_router(create_state());

    send(
        &app,
        "PUT",
        "/api/set",
        Some(r#"{"key":"short","value":"x","ttl_ms":100}"#),
    )
    .await;
    tokio::time::advance(Duration::from_millis(150)).await;

    let (status, _) = send(&app, "GET", "/api/get/short", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == DELETE ==

#[tokio::test]
async fn test_delete_endpoint() {
    let app = create_router(create_state());

    send(&app, "PUT", "/api/set", Some(r#"{"key":"gone","value":null}"#)).await;

    let (status, _) = send(&app, "DELETE", "/api/del/gone", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "DELETE", "/api/del/gone", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == KEYS / CLEAR ==

#[tokio::test]
async fn test_keys_and_clear_endpoints() {
    let app = create_router(create_state());

    send(&app, "PUT", "/ui/set", Some(r#"{"key":"theme","value":"dark"}"#)).await;
    send(&app, "PUT", "/ui/set", Some(r#"{"key":"sidebar","value":true}"#)).await;

    let (status, json) = send(&app, "GET", "/ui/keys", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["keys"], serde_json::json!(["sidebar", "theme"]));

    let (status, _) = send(&app, "DELETE", "/ui/clear", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&app, "GET", "/ui/keys", None).await;
    assert_eq!(json["keys"], serde_json::json!([]));
}

// == STATS ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_router(create_state());

    send(&app, "PUT", "/api/set", Some(r#"{"key":"a","value":1}"#)).await;
    send(&app, "PUT", "/api/set", Some(r#"{"key":"b","value":2}"#)).await;
    send(&app, "GET", "/api/get/a", None).await;
    send(&app, "GET", "/api/get/a", None).await;
    send(&app, "GET", "/api/get/a", None).await;
    send(&app, "GET", "/api/get/b", None).await;

    let (status, json) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"], 2);
    assert_eq!(json["capacity"], 500);
    assert_eq!(json["average_access_count"], 2.0);
    assert_eq!(json["hit_rate"], 2.0);
}

#[tokio::test]
async fn test_unknown_cache_name() {
    let app = create_router(create_state());

    let (status, json) = send(&app, "GET", "/inventory/stats", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("inventory"));
}

// == HEALTH ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(create_state());

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}
