//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use customer_crm::{app, AppState, InMemoryCustomerStore, ServerConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> Router {
    let state = AppState::new(Arc::new(InMemoryCustomerStore::new()));
    app(state, &ServerConfig::default())
}

pub fn test_app_with_limit(body_limit_bytes: usize) -> Router {
    let state = AppState::new(Arc::new(InMemoryCustomerStore::new()));
    let server = ServerConfig {
        body_limit_bytes,
        ..ServerConfig::default()
    };
    app(state, &server)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse { status, body }
}
