//! Data models for profiles and test results

use crate::catalog::TestCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used when mapping a score to a percentile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {}. Must be one of: male, female", s)),
        }
    }
}

/// A completed test, owned by exactly one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub test_id: String,
    pub test_name: String,
    pub category: TestCategory,
    pub score: f64,
    pub percentile: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Whether recording a result added a new entry or replaced an older one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordOutcome {
    Added,
    Replaced,
}

/// A tracked individual and their accumulated results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// At most one result per test id
    #[serde(default)]
    pub results: Vec<TestResult>,
}

impl Profile {
    /// Stored result for a test, if any
    pub fn result_for(&self, test_id: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.test_id == test_id)
    }

    /// Store a result, replacing any existing result for the same test in place
    pub fn record_result(&mut self, result: TestResult) -> RecordOutcome {
        match self.results.iter_mut().find(|r| r.test_id == result.test_id) {
            Some(existing) => {
                *existing = result;
                RecordOutcome::Replaced
            }
            None => {
                self.results.push(result);
                RecordOutcome::Added
            }
        }
    }

    /// Mean percentile across all results, 0 when there are none
    pub fn average_percentile(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.results.iter().map(|r| r.percentile).sum::<f64>() / self.results.len() as f64
    }

    /// Class value, treating an empty string as unset
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref().filter(|c| !c.is_empty())
    }
}
