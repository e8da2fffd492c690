//! Leaderboard routes

use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::services::LeaderboardService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitness_tests_shared::ranking::Leaderboard;
use fitness_tests_shared::types::{LeaderboardQuery, MetricOption};

pub fn leaderboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/metrics", get(list_metrics))
}

/// GET /api/v1/leaderboard?metric=overall
///
/// Defaults to the overall metric when none is given.
async fn get_leaderboard(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LeaderboardQuery>,
) -> ApiResult<Json<Leaderboard>> {
    let metric = query.metric.unwrap_or_default();
    Ok(Json(LeaderboardService::leaderboard(&state, &metric).await?))
}

/// GET /api/v1/leaderboard/metrics
async fn list_metrics(State(state): State<AppState>) -> ApiResult<Json<Vec<MetricOption>>> {
    Ok(Json(LeaderboardService::metrics(&state).await?))
}
