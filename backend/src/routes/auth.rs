//! Mock login routes
//!
//! Signs in as one of the demo roster students. There are no credentials
//! or tokens; the session simply switches to that student's profile.

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use fitness_tests_shared::types::{LoginRequest, ProfileResponse};
use serde::Serialize;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(ProfileService::login(&state, &req).await?))
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub signed_out: bool,
}

/// POST /api/v1/auth/logout
async fn logout(State(state): State<AppState>) -> Json<LogoutResponse> {
    Json(LogoutResponse {
        signed_out: ProfileService::logout(&state).await,
    })
}
