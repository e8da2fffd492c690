//! Dashboard service

use crate::error::ApiError;
use crate::state::AppState;
use fitness_tests_shared::DashboardSummary;

pub struct DashboardService;

impl DashboardService {
    pub async fn summary(state: &AppState) -> Result<DashboardSummary, ApiError> {
        let session = state.session().read().await;
        let profile = session.require_profile()?;
        Ok(DashboardSummary::build(
            profile,
            state.config().dashboard.recent_tests_limit,
        ))
    }
}
