//! Fitness Tests Shared Library
//!
//! Test catalog, scoring engine and ranking engine for children's fitness
//! tests, plus the profile session and API types shared by the backend and
//! WASM modules.

pub mod catalog;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod ranking;
pub mod roster;
pub mod scoring;
pub mod session;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use catalog::{MeasurementInput, TestCategory, TestDefinition, TestKind};
pub use dashboard::{DashboardSummary, PercentileBand};
pub use errors::*;
pub use models::{Gender, Profile, RecordOutcome, TestResult};
pub use ranking::{Leaderboard, LeaderboardEntry, LeaderboardMetric};
pub use scoring::{submit_test, Measurements};
pub use session::{ProfileChange, Session, Submission};
pub use types::*;
pub use validation::ProfileUpdate;
