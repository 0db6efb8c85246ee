// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;
use yamdb_core::application::services::{ApplicationServices, Repositories};
use yamdb_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

use super::mocks::{
    DummyClock, DummyPasswordHasher, DummySlug, DummyTokenManager, InMemoryStore, seeded_store,
};

/// Router wired to a fresh seeded in-memory store.
pub fn test_app() -> (axum::Router, Arc<InMemoryStore>) {
    let store = seeded_store();
    (router_for(Arc::clone(&store)), store)
}

pub fn router_for(store: Arc<InMemoryStore>) -> axum::Router {
    let repos = Repositories {
        users: store.clone(),
        categories: store.clone(),
        genres: store.clone(),
        title_write: store.clone(),
        title_read: store.clone(),
        reviews: store.clone(),
        comments: store,
    };
    let services = Arc::new(ApplicationServices::new(
        repos,
        Arc::new(DummyPasswordHasher),
        Arc::new(DummyTokenManager),
        Arc::new(DummyClock),
        Arc::new(DummySlug),
    ));
    build_router(HttpState { services }, &RouterOptions::default())
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "expected JSON body, got: {}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };
    (status, json)
}

/// Asserts the `{error, message}` envelope and returns the message.
pub fn assert_error_response(
    status: StatusCode,
    body: &Value,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(status, expected_status, "unexpected body: {body}");
    assert_eq!(body["error"], expected_error, "unexpected error field");
    let message = body["message"].as_str().unwrap_or_default();
    assert!(!message.is_empty(), "expected non-empty message field");
    message.to_string()
}

/// Creates a title through the API as admin and returns its id.
pub async fn create_title(app: &axum::Router, payload: Value) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/titles",
        Some(super::mocks::ADMIN_TOKEN),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "title creation failed: {body}");
    body["id"].as_i64().expect("title id")
}

/// Posts a review as `token` and returns the raw response.
pub async fn post_review(
    app: &axum::Router,
    title_id: i64,
    token: &str,
    payload: Value,
) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/api/v1/titles/{title_id}/reviews"),
        Some(token),
        Some(payload),
    )
    .await
}
