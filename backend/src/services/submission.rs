//! Submission service - scores a test for the current profile and stores it

use crate::error::ApiError;
use crate::state::AppState;
use fitness_tests_shared::types::SubmitTestResponse;
use fitness_tests_shared::{Measurements, RecordOutcome};
use tracing::{debug, info, warn};

pub struct SubmissionService;

impl SubmissionService {
    /// Validate, score and record one test; rejected submissions change nothing
    pub async fn submit(
        state: &AppState,
        test_id: &str,
        values: &Measurements,
    ) -> Result<SubmitTestResponse, ApiError> {
        debug!(test_id, inputs = values.len(), "Scoring test submission");

        let outcome = state.session().write().await.submit_test(test_id, values);
        let submission = match outcome {
            Ok(submission) => submission,
            Err(e) => {
                warn!(test_id, error = %e, "Test submission rejected");
                return Err(e.into());
            }
        };

        info!(
            test_id,
            score = submission.result.score,
            percentile = submission.result.percentile,
            replaced = submission.outcome == RecordOutcome::Replaced,
            "Test result recorded"
        );

        Ok(submission.into())
    }
}
