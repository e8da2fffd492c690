//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The server keeps a single in-memory [`Session`] per process. It is lost
//! on restart; there is no persistence layer.

use crate::config::AppConfig;
use fitness_tests_shared::roster::demo_classmates;
use fitness_tests_shared::{Profile, Session};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// All fields are Arc-wrapped so cloning into handlers is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    session: Arc<RwLock<Session>>,
    /// Leaderboard peers and mock login targets; fixed after startup
    roster: Arc<Vec<Profile>>,
}

impl AppState {
    /// Create a new application state with an empty session
    pub fn new(config: AppConfig) -> Self {
        let roster = if config.session.seed_roster {
            demo_classmates()
        } else {
            Vec::new()
        };
        Self::with_roster(config, roster)
    }

    pub fn with_roster(config: AppConfig, roster: Vec<Profile>) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(Session::new())),
            roster: Arc::new(roster),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The current session; take the write lock for any mutation
    #[inline]
    pub fn session(&self) -> &RwLock<Session> {
        &self.session
    }

    #[inline]
    pub fn roster(&self) -> &[Profile] {
        &self.roster
    }
}
