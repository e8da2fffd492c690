//! Session state: the current profile and its results
//!
//! The session is an explicit value owned by the caller. It starts empty, is
//! populated by the first profile submission (or a roster login), and is
//! dropped when the process ends. Every mutation goes through `&mut self`,
//! and a rejected operation leaves the stored profile untouched.

use crate::catalog;
use crate::errors::{FitnessError, FitnessResult};
use crate::models::{Profile, RecordOutcome, TestResult};
use crate::scoring::{self, Measurements};
use crate::validation::{validate_measurements, ProfileUpdate};
use uuid::Uuid;

/// Outcome of a successful test submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub result: TestResult,
    pub outcome: RecordOutcome,
}

/// Whether a profile update created a new profile or edited the existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChange {
    Created,
    Updated,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Profile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    /// The current profile, or `ProfileRequired` when nobody has signed in yet
    pub fn require_profile(&self) -> FitnessResult<&Profile> {
        self.current
            .as_ref()
            .ok_or(FitnessError::ProfileRequired)
    }

    /// Create the profile on first submission, otherwise merge the edit
    ///
    /// Edits keep the profile id and its results.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> FitnessResult<ProfileChange> {
        let update = update.validated()?;

        match self.current.as_mut() {
            Some(profile) => {
                profile.name = update.name;
                profile.age = update.age;
                profile.weight_kg = update.weight_kg;
                profile.height_cm = update.height_cm;
                profile.gender = update.gender;
                profile.school = update.school;
                profile.class = update.class;
                Ok(ProfileChange::Updated)
            }
            None => {
                self.current = Some(Profile {
                    id: Uuid::new_v4().to_string(),
                    name: update.name,
                    age: update.age,
                    weight_kg: update.weight_kg,
                    height_cm: update.height_cm,
                    gender: update.gender,
                    school: update.school,
                    class: update.class,
                    results: Vec::new(),
                });
                Ok(ProfileChange::Created)
            }
        }
    }

    /// Replace the current profile wholesale
    pub fn sign_in(&mut self, profile: Profile) {
        self.current = Some(profile);
    }

    pub fn sign_out(&mut self) -> Option<Profile> {
        self.current.take()
    }

    /// Validate, score and store a test for the current profile
    ///
    /// The stored result replaces any earlier result for the same test.
    pub fn submit_test(&mut self, test_id: &str, values: &Measurements) -> FitnessResult<Submission> {
        let profile = self
            .current
            .as_mut()
            .ok_or(FitnessError::ProfileRequired)?;

        let definition = catalog::require(test_id)?;
        validate_measurements(definition, values)?;

        let result = scoring::submit_test(test_id, values, profile.age, profile.gender)?;
        let outcome = profile.record_result(result.clone());
        Ok(Submission { result, outcome })
    }
}
