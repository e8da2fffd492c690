//! Profile API routes

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitness_tests_shared::types::ProfileResponse;
use fitness_tests_shared::ProfileUpdate;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - Get the current profile
async fn get_profile(State(state): State<AppState>) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(ProfileService::get_profile(&state).await?))
}

/// PUT /api/v1/profile - Create or edit the current profile
async fn update_profile(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProfileUpdate>,
) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(ProfileService::update_profile(&state, req).await?))
}
