//! Profile service - the session's current profile, editing and mock login

use crate::error::ApiError;
use crate::state::AppState;
use fitness_tests_shared::roster::find_student;
use fitness_tests_shared::types::{LoginRequest, ProfileResponse};
use fitness_tests_shared::{ProfileChange, ProfileUpdate};
use tracing::info;

/// Profile service for the in-memory session
pub struct ProfileService;

impl ProfileService {
    /// Get the current profile
    pub async fn get_profile(state: &AppState) -> Result<ProfileResponse, ApiError> {
        let session = state.session().read().await;
        let profile = session.require_profile()?;
        Ok(ProfileResponse::new(profile.clone()))
    }

    /// Create the profile on first save, otherwise edit it in place
    pub async fn update_profile(
        state: &AppState,
        update: ProfileUpdate,
    ) -> Result<ProfileResponse, ApiError> {
        let mut session = state.session().write().await;
        let change = session.update_profile(update)?;
        let profile = session.require_profile()?.clone();

        match change {
            ProfileChange::Created => info!(profile_id = %profile.id, "Profile created"),
            ProfileChange::Updated => info!(profile_id = %profile.id, "Profile updated"),
        }

        Ok(ProfileResponse::after_change(profile, change))
    }

    /// Sign in as a roster student, replacing the current profile
    pub async fn login(state: &AppState, req: &LoginRequest) -> Result<ProfileResponse, ApiError> {
        let profile = find_student(state.roster(), &req.student_id, &req.name)?;
        info!(student_id = %profile.id, "Student logged in");

        state.session().write().await.sign_in(profile.clone());
        Ok(ProfileResponse::new(profile))
    }

    /// Clear the session; returns whether a profile was signed in
    pub async fn logout(state: &AppState) -> bool {
        let previous = state.session().write().await.sign_out();
        if let Some(profile) = &previous {
            info!(profile_id = %profile.id, "Signed out");
        }
        previous.is_some()
    }
}
