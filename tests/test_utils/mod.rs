//! Test utilities for integration tests
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use event_scheduler::api::AppState;
use event_scheduler::api::app;
use event_scheduler::core::AppConfig;

/// Application router backed by an events file in a temporary
/// directory. The directory is removed when this is dropped so keep
/// it alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub data_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    /// Send a request through a clone of the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and decode the JSON response body
    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        (status, body_to_json(response.into_body()).await)
    }

    /// Contents of the events file as JSON
    pub fn persisted(&self) -> Value {
        let raw = std::fs::read_to_string(&self.data_path).expect("Failed to read events file");
        serde_json::from_str(&raw).expect("Events file is not valid JSON")
    }
}

/// Creates a test application with an empty events file location.
pub fn test_app() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let data_path = dir.path().join("events.json");
    let config = AppConfig::new(data_path.to_str().unwrap());
    let app_state = AppState::new(config);

    TestApp {
        router: app(Arc::new(app_state)),
        data_path,
        _dir: dir,
    }
}

/// Same as `test_app` but with the events file pre-populated
pub fn test_app_with_file(contents: &str) -> TestApp {
    let test_app = test_app();
    std::fs::write(&test_app.data_path, contents).expect("Failed to write events file");
    test_app
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}
