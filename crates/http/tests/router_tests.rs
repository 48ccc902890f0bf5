#![expect(clippy::unwrap_used, reason = "test code")]

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt as _;

use common::{router_for, sqlite_router, BrokenStore, RacingStore};

async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder.body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned()))).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_returns_plain_ok() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let (status, body) = send(&router, Method::GET, "/_health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn list_empty_store_returns_empty_array() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let (status, body) = send_json(&router, Method::GET, "/insights", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_201_with_wire_shape() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let (status, body) =
        send_json(&router, Method::POST, "/insights", Some(r#"{"brand": 2, "text": "Loyal"}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["brand"], 2);
    assert_eq!(body["text"], "Loyal");
    let created_at = body["createdAt"].as_str().unwrap();
    assert!(insights_core::parse_timestamp(created_at).is_ok());
    assert!(created_at.ends_with('Z'));
}

#[tokio::test]
async fn create_then_get_and_list() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let (_, created) =
        send_json(&router, Method::POST, "/insights", Some(r#"{"brand": 4, "text": "one"}"#)).await;
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send_json(&router, Method::GET, &format!("/insights/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send_json(&router, Method::GET, "/insights", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn create_validation_failure_is_400_with_all_messages() {
    let (router, storage, _temp_dir) = sqlite_router();
    let (status, body) =
        send_json(&router, Method::POST, "/insights", Some(r#"{"brand": -1, "text": ""}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("non-negative integer"));
    assert!(error.contains("cannot be empty"));
    assert_eq!(storage.count().unwrap(), 0);
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let (status, body) = send_json(&router, Method::POST, "/insights", Some("{brand:")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid JSON body"}));
}

#[tokio::test]
async fn get_missing_is_404() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let (status, body) = send_json(&router, Method::GET, "/insights/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Insight not found"}));
}

#[tokio::test]
async fn non_numeric_ids_are_400() {
    let (router, _storage, _temp_dir) = sqlite_router();
    for uri in ["/insights/abc", "/insights/12abc", "/insights/1.5"] {
        let (status, body) = send_json(&router, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "GET {uri}");
        assert_eq!(body, json!({"error": "Invalid ID parameter"}));

        let (status, _) = send_json(&router, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "DELETE {uri}");
    }
}

#[tokio::test]
async fn delete_existing_then_again() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let (_, created) =
        send_json(&router, Method::POST, "/insights", Some(r#"{"brand": 0, "text": "gone"}"#)).await;
    let uri = format!("/insights/{}", created["id"]);

    let (status, body) = send_json(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Insight deleted successfully"}));

    let (status, body) = send_json(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Insight not found"}));
}

#[tokio::test]
async fn delete_race_lost_is_500_not_404() {
    let router = router_for(Arc::new(RacingStore));
    let (status, body) = send_json(&router, Method::DELETE, "/insights/3", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to delete insight"}));
}

#[tokio::test]
async fn storage_faults_are_500_without_details() {
    let router = router_for(Arc::new(BrokenStore));
    let cases = [
        (Method::GET, "/insights", None, "Failed to list insights"),
        (Method::GET, "/insights/1", None, "Failed to lookup insight"),
        (Method::POST, "/insights", Some(r#"{"brand": 1, "text": "x"}"#), "Failed to create insight"),
        (Method::DELETE, "/insights/1", None, "Failed to delete insight"),
    ];

    for (method, uri, body, expected) in cases {
        let (status, bytes) = send(&router, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains("secret internal detail"));
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!({"error": expected}));
    }
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let (router, _storage, _temp_dir) = sqlite_router();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/insights")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
