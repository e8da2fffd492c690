//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a fresh in-memory session, so tests are independent.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitness_tests_backend::{config::AppConfig, routes, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with the demo roster and an empty session
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let app = routes::create_router(state.clone());
        Self { app, state }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body)).await
    }

    async fn send(&self, method: &str, path: &str, body: Option<&str>) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// GET and parse the body as JSON
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(path).await;
        (status, parse(&body))
    }

    /// POST and parse the body as JSON
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        (status, parse(&body))
    }

    /// PUT and parse the body as JSON
    pub async fn put_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, body) = self.put(path, &body.to_string()).await;
        (status, parse(&body))
    }

    /// Create a profile through the API
    pub async fn create_profile(&self, class: Option<&str>) -> Value {
        let (status, body) = self.put_json("/api/v1/profile", &profile_body("Test Student", class)).await;
        assert_eq!(status, StatusCode::OK, "profile creation failed: {}", body);
        body["profile"].clone()
    }

    /// Submit one test through the API
    pub async fn submit(&self, test_id: &str, values: Value) -> (StatusCode, Value) {
        self.post_json(
            &format!("/api/v1/tests/{}/submit", test_id),
            &json!({ "values": values }),
        )
        .await
    }
}

pub fn profile_body(name: &str, class: Option<&str>) -> Value {
    json!({
        "name": name,
        "age": 12,
        "weight_kg": 45.0,
        "height_cm": 150.0,
        "gender": "female",
        "school": "Springfield Elementary",
        "class": class,
    })
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
