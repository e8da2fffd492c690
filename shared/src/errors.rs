//! Error types for the fitness testing core

use thiserror::Error;

/// Errors raised by the catalog, scoring, session and ranking layers
///
/// None of these are fatal: the caller surfaces the message and abandons the
/// current action. Stored results are never touched on the error path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitnessError {
    /// One or more measurements or profile fields are missing or unusable
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        /// Ids of the offending fields, in declaration order
        fields: Vec<String>,
    },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The operation needs a current profile and none is signed in
    #[error("Profile required: create a profile or log in first")]
    ProfileRequired,

    /// Arithmetic that would otherwise yield NaN or infinity
    #[error("Computation error: {0}")]
    Computation(String),
}

impl FitnessError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        FitnessError::Validation {
            message: message.into(),
            fields: vec![field.to_string()],
        }
    }

    /// Validation failure for a set of measurements that were not supplied
    pub fn missing_measurements(fields: Vec<String>) -> Self {
        FitnessError::Validation {
            message: format!(
                "Please enter all required measurements (missing: {})",
                fields.join(", ")
            ),
            fields,
        }
    }

    pub fn test_not_found(id: &str) -> Self {
        FitnessError::NotFound {
            kind: "Test",
            id: id.to_string(),
        }
    }

    pub fn student_not_found(id: &str) -> Self {
        FitnessError::NotFound {
            kind: "Student",
            id: id.to_string(),
        }
    }

    /// First offending field, if this is a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            FitnessError::Validation { fields, .. } => fields.first().map(String::as_str),
            _ => None,
        }
    }
}

pub type FitnessResult<T> = Result<T, FitnessError>;
