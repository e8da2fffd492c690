//! Request extractors that reject with the API error envelope
//!
//! axum's stock `Json` and `Query` reject with plain-text bodies. These
//! wrappers map the rejection into [`ApiError::BadRequest`] so malformed
//! input gets the same JSON shape as every other error.

use crate::error::ApiError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Reps {
        #[allow(dead_code)]
        reps: f64,
    }

    #[derive(Debug, Deserialize)]
    struct Params {
        #[allow(dead_code)]
        limit: u32,
    }

    fn app() -> Router {
        Router::new()
            .route("/body", post(|ApiJson(_): ApiJson<Reps>| async { "ok" }))
            .route("/query", get(|ApiQuery(_): ApiQuery<Params>| async { "ok" }))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let request = Request::post("/body")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"reps\": "))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_wrong_json_shape_uses_error_envelope() {
        let request = Request::post("/body")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"reps": "lots"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_bad_query_uses_error_envelope() {
        let request = Request::get("/query?limit=many").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_error_envelope() {
        let request = Request::post("/body").body(Body::from(r#"{"reps": 3}"#)).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }
}
