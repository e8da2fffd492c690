//! Leaderboard service - ranks the current profile against the roster

use crate::error::ApiError;
use crate::state::AppState;
use fitness_tests_shared::ranking::{self, Leaderboard, LeaderboardMetric};
use fitness_tests_shared::types::MetricOption;
use fitness_tests_shared::Profile;
use tracing::debug;

pub struct LeaderboardService;

impl LeaderboardService {
    /// Roster with any entry sharing the viewer's id swapped for the live profile
    pub fn peers_with_viewer(roster: &[Profile], viewer: &Profile) -> Vec<Profile> {
        roster
            .iter()
            .map(|p| if p.id == viewer.id { viewer.clone() } else { p.clone() })
            .collect()
    }

    pub async fn leaderboard(
        state: &AppState,
        metric: &LeaderboardMetric,
    ) -> Result<Leaderboard, ApiError> {
        let session = state.session().read().await;
        let viewer = session.require_profile()?;
        let peers = Self::peers_with_viewer(state.roster(), viewer);

        let board = ranking::rank(&peers, viewer, metric);
        debug!(
            metric = %metric,
            total = board.total,
            viewer_rank = board.viewer_rank,
            "Leaderboard computed"
        );
        Ok(board)
    }

    pub async fn metrics(state: &AppState) -> Result<Vec<MetricOption>, ApiError> {
        let session = state.session().read().await;
        let viewer = session.require_profile()?;
        let peers = Self::peers_with_viewer(state.roster(), viewer);

        Ok(ranking::available_metrics(&peers, viewer)
            .into_iter()
            .map(|metric| MetricOption {
                label: ranking::metric_label(&metric, &peers, viewer),
                metric,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use fitness_tests_shared::roster::demo_classmates;

    #[test]
    fn test_peers_with_viewer_replaces_stale_copy() {
        let roster = demo_classmates();
        let mut viewer = roster[3].clone();
        viewer.results.clear();

        let peers = LeaderboardService::peers_with_viewer(&roster, &viewer);
        assert_eq!(peers.len(), roster.len());
        assert!(peers[3].results.is_empty());
        assert_eq!(peers[0].results.len(), 2);
    }

    #[tokio::test]
    async fn test_logged_in_student_ranked_once() {
        let state = AppState::new(AppConfig::default());
        let alex = state.roster()[0].clone();
        state.session().write().await.sign_in(alex);

        let board = LeaderboardService::leaderboard(&state, &LeaderboardMetric::Overall)
            .await
            .unwrap();
        // S1001, S1004 and S1005 share class 6A
        assert_eq!(board.total, 3);
        assert_eq!(board.entries.iter().filter(|e| e.is_viewer).count(), 1);
        // S1004 79, S1001 78.5, S1005 75.5
        assert_eq!(board.viewer_rank, 2);
        assert_eq!(board.viewer_score, 78.5);
    }

    #[tokio::test]
    async fn test_metrics_require_profile() {
        let state = AppState::new(AppConfig::default());
        assert!(matches!(
            LeaderboardService::metrics(&state).await,
            Err(ApiError::ProfileRequired)
        ));
    }
}
