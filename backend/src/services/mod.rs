//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the in-memory session and the shared scoring and ranking engines.

pub mod catalog;
pub mod dashboard;
pub mod leaderboard;
pub mod profile;
pub mod submission;

pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use leaderboard::LeaderboardService;
pub use profile::ProfileService;
pub use submission::SubmissionService;
