//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness probe (test catalog is well formed)
//! - /health/live - Liveness probe (always returns OK if server is running)

use axum::{http::StatusCode, Json};
use fitness_tests_shared::catalog::{self, TestCategory, TestDefinition};
use std::collections::HashSet;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub catalog: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    fn healthy(message: Option<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            message,
        }
    }

    fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }

    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness probe
///
/// All state is in memory, so the only thing that can be wrong is the test
/// catalog itself. Returns 503 if it is malformed.
pub async fn readiness_check() -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(catalog::all_tests());
    let is_healthy = catalog_check.is_healthy();

    let response = HealthResponse {
        status: if is_healthy { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(HealthChecks {
            catalog: catalog_check,
        }),
    };

    if is_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Test ids must be unique, every test needs an input and every category
/// needs a test
fn check_catalog(tests: &[TestDefinition]) -> CheckStatus {
    let mut seen = HashSet::new();
    if let Some(dup) = tests.iter().find(|t| !seen.insert(t.id)) {
        return CheckStatus::unhealthy(format!("duplicate test id {}", dup.id));
    }
    if let Some(t) = tests.iter().find(|t| t.inputs.is_empty()) {
        return CheckStatus::unhealthy(format!("{} declares no inputs", t.id));
    }
    if let Some(c) = TestCategory::ALL
        .iter()
        .find(|c| !tests.iter().any(|t| t.category == **c))
    {
        return CheckStatus::unhealthy(format!("no tests in category {}", c.as_str()));
    }
    CheckStatus::healthy(Some(format!("{} tests", tests.len())))
}

/// Liveness probe - checks if the service is alive
/// Always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}
