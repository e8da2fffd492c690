//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting domain errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitness_tests_shared::{ErrorDetail, ErrorResponse, FitnessError};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The session has no current profile
    #[error("Profile required")]
    ProfileRequired,

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<FitnessError> for ApiError {
    fn from(err: FitnessError) -> Self {
        match err {
            FitnessError::Validation { message, fields } => ApiError::Validation { message, fields },
            FitnessError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            FitnessError::ProfileRequired => ApiError::ProfileRequired,
            FitnessError::Computation(msg) => ApiError::Computation(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut field = None;
        let mut details = None;

        let (status, code, message) = match self {
            ApiError::Validation { message, fields } => {
                field = fields.first().cloned();
                if fields.len() > 1 {
                    details = Some(serde_json::json!({ "fields": fields }));
                }
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::ProfileRequired => (
                StatusCode::UNAUTHORIZED,
                "PROFILE_REQUIRED",
                "Create a profile or log in first".to_string(),
            ),
            ApiError::Computation(msg) => (StatusCode::BAD_REQUEST, "COMPUTATION_ERROR", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
                details,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
