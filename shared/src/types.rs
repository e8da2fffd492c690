//! API request and response types

use crate::catalog::{self, TestCategory};
use crate::dashboard::{BandInfo, PercentileBand};
use crate::models::{Profile, RecordOutcome, TestResult};
use crate::ranking::LeaderboardMetric;
use crate::scoring::Measurements;
use crate::session::{ProfileChange, Submission};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Query string for the test listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestListQuery {
    #[serde(default)]
    pub category: Option<TestCategory>,
}

/// A category together with its display metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: TestCategory,
    pub label: String,
    pub icon: String,
    pub test_count: usize,
}

impl CategorySummary {
    pub fn for_category(category: TestCategory) -> Self {
        let info = category.info();
        Self {
            id: category,
            label: info.label.to_string(),
            icon: info.icon.to_string(),
            test_count: catalog::get_by_category(category).len(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

/// Measurements for one test submission, keyed by input id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTestRequest {
    pub values: Measurements,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTestResponse {
    pub result: TestResult,
    /// True when an earlier result for the same test was replaced
    pub replaced: bool,
    pub band: BandInfo,
}

impl From<Submission> for SubmitTestResponse {
    fn from(submission: Submission) -> Self {
        let band = PercentileBand::from_percentile(submission.result.percentile).into();
        Self {
            replaced: submission.outcome == RecordOutcome::Replaced,
            result: submission.result,
            band,
        }
    }
}

// ============================================================================
// Profile and Login
// ============================================================================

/// Mock roster login; not an authentication mechanism
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub student_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
}

impl ProfileResponse {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            created: None,
        }
    }

    pub fn after_change(profile: Profile, change: ProfileChange) -> Self {
        Self {
            profile,
            created: Some(change == ProfileChange::Created),
        }
    }
}

// ============================================================================
// Leaderboard
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub metric: Option<LeaderboardMetric>,
}

/// A selectable leaderboard metric with its display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricOption {
    pub metric: LeaderboardMetric,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_submit_request_parses_values() {
        let req: SubmitTestRequest =
            serde_json::from_str(r#"{"values":{"weight_kg":50,"height_m":1.6}}"#).unwrap();
        assert_eq!(req.values.len(), 2);
        assert_eq!(req.values["height_m"], 1.6);
    }

    #[test]
    fn test_submit_response_flags_replacement() {
        let result = TestResult {
            id: "r1".into(),
            test_id: "squat-test".into(),
            test_name: "Squat Test".into(),
            category: TestCategory::Strength,
            score: 20.0,
            percentile: 100.0,
            recorded_at: Utc::now(),
        };
        let response = SubmitTestResponse::from(Submission {
            result,
            outcome: RecordOutcome::Replaced,
        });
        assert!(response.replaced);
        assert_eq!(response.band.label, "Excellent");
    }

    #[test]
    fn test_category_summary_counts_tests() {
        let summary = CategorySummary::for_category(TestCategory::Endurance);
        assert_eq!(summary.test_count, 5);
        assert_eq!(summary.label, "Endurance & Running");
    }

    #[test]
    fn test_query_defaults() {
        let q: LeaderboardQuery = serde_json::from_str("{}").unwrap();
        assert!(q.metric.is_none());
        let q: TestListQuery = serde_json::from_str(r#"{"category":"body_composition"}"#).unwrap();
        assert_eq!(q.category, Some(TestCategory::BodyComposition));
    }
}
