//! Input validation functions
//!
//! Measurement bounds come from each test's declared inputs; profile fields
//! are checked with the `validator` derive on [`ProfileUpdate`].

use crate::catalog::{MeasurementInput, TestDefinition};
use crate::errors::{FitnessError, FitnessResult};
use crate::scoring::Measurements;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

// ============================================================================
// Measurement Validation
// ============================================================================

/// Validate one measurement against its declared bounds
pub fn validate_measurement(input: &MeasurementInput, value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if let Some(min) = input.min {
        if value < min {
            return Err(format!("must be at least {}{}", min, unit_suffix(input)));
        }
    }
    if let Some(max) = input.max {
        if value > max {
            return Err(format!("must be at most {}{}", max, unit_suffix(input)));
        }
    }
    Ok(())
}

fn unit_suffix(input: &MeasurementInput) -> String {
    if input.unit.is_empty() {
        String::new()
    } else {
        format!(" {}", input.unit)
    }
}

/// Validate a full submission: every declared input present and in range
///
/// Missing inputs are reported together; otherwise the first out-of-range
/// input is reported with its label.
pub fn validate_measurements(
    definition: &TestDefinition,
    values: &Measurements,
) -> FitnessResult<()> {
    let missing = definition.missing_inputs(values);
    if !missing.is_empty() {
        return Err(FitnessError::missing_measurements(missing));
    }

    for input in definition.inputs {
        if let Err(msg) = validate_measurement(input, values[input.id]) {
            return Err(FitnessError::validation(
                input.id,
                format!("{}: {}", input.label, msg),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Profile Validation
// ============================================================================

/// Profile form submission
///
/// Name, age, weight, height and gender are required; school and class are
/// optional. Bounds cover school-age children: 5-18 years, 15-150 kg and
/// 60-220 cm, all inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub name: String,
    #[validate(range(min = 5, max = 18, message = "must be between 5 and 18 years"))]
    pub age: u32,
    #[validate(range(min = 15.0, max = 150.0, message = "must be between 15 and 150 kg"))]
    pub weight_kg: f64,
    #[validate(range(min = 60.0, max = 220.0, message = "must be between 60 and 220 cm"))]
    pub height_cm: f64,
    pub gender: crate::models::Gender,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

impl ProfileUpdate {
    /// Trim text fields and drop blank optional ones
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.school = non_blank(self.school);
        self.class = non_blank(self.class);
        self
    }

    /// Normalize, then run field validation
    pub fn validated(self) -> FitnessResult<Self> {
        let update = self.normalized();
        update.validate().map_err(profile_validation_error)?;
        if !update.weight_kg.is_finite() || !update.height_cm.is_finite() {
            return Err(FitnessError::validation(
                "weight_kg",
                "Weight and height must be valid numbers",
            ));
        }
        Ok(update)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Convert derive-validator errors into a single user-facing error
pub fn profile_validation_error(errors: ValidationErrors) -> FitnessError {
    let field_errors = errors.field_errors();
    let mut entries: Vec<(String, String)> = field_errors
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            (field.to_string(), message)
        })
        .collect();
    entries.sort_by_key(|(field, _)| field_order(field));

    let message = entries
        .iter()
        .map(|(field, message)| format!("{} {}", get_field_display_label(field), message))
        .collect::<Vec<_>>()
        .join("; ");

    FitnessError::Validation {
        message,
        fields: entries.into_iter().map(|(field, _)| field).collect(),
    }
}

fn field_order(field: &str) -> usize {
    ["name", "age", "weight_kg", "height_cm", "gender", "school", "class"]
        .iter()
        .position(|f| *f == field)
        .unwrap_or(usize::MAX)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Full Name",
        "age" => "Age",
        "weight_kg" | "weight" => "Weight",
        "height_cm" | "height" => "Height",
        "gender" => "Gender",
        "school" => "School",
        "class" => "Class/Grade",
        "student_id" => "Student ID",
        _ => field_name,
    }
}
