//! Fitness Tests WASM Module
//!
//! Browser bindings for the catalog, scoring engine and ranking engine.
//! Structured values cross the boundary as JSON strings.

use fitness_tests_shared::dashboard::{self, PercentileBand};
use fitness_tests_shared::ranking::{self, LeaderboardMetric};
use fitness_tests_shared::{catalog, scoring, Gender, Measurements, Profile};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn score_test_inner(test_id: &str, values_json: &str, age: u32, gender: &str) -> Result<String, String> {
    let gender: Gender = gender.parse()?;
    let values: Measurements =
        serde_json::from_str(values_json).map_err(|e| format!("Invalid measurements: {}", e))?;
    let definition = catalog::require(test_id).map_err(|e| e.to_string())?;
    fitness_tests_shared::validation::validate_measurements(definition, &values)
        .map_err(|e| e.to_string())?;
    let result = scoring::submit_test(test_id, &values, age, gender).map_err(|e| e.to_string())?;
    to_json(&result)
}

fn rank_inner(peers_json: &str, viewer_json: &str, metric: &str) -> Result<String, String> {
    let peers: Vec<Profile> =
        serde_json::from_str(peers_json).map_err(|e| format!("Invalid peers: {}", e))?;
    let viewer: Profile =
        serde_json::from_str(viewer_json).map_err(|e| format!("Invalid viewer: {}", e))?;
    let metric = LeaderboardMetric::from(metric.to_string());
    to_json(&ranking::rank(&peers, &viewer, &metric))
}

/// The full test catalog as JSON
#[wasm_bindgen]
pub fn catalog_json() -> Result<String, JsError> {
    to_json(catalog::all_tests()).map_err(|e| JsError::new(&e))
}

/// The category list as JSON
#[wasm_bindgen]
pub fn categories_json() -> Result<String, JsError> {
    to_json(catalog::list_categories()).map_err(|e| JsError::new(&e))
}

/// Validate and score one test; returns the result as JSON
#[wasm_bindgen]
pub fn score_test(test_id: &str, values_json: &str, age: u32, gender: &str) -> Result<String, JsError> {
    score_test_inner(test_id, values_json, age, gender).map_err(|e| JsError::new(&e))
}

/// Rank a viewer among peers; profiles are passed as JSON
#[wasm_bindgen]
pub fn rank_json(peers_json: &str, viewer_json: &str, metric: &str) -> Result<String, JsError> {
    rank_inner(peers_json, viewer_json, metric).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen]
pub fn fallback_percentile(score: f64) -> f64 {
    scoring::fallback_percentile(score)
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    dashboard::calculate_bmi(weight_kg, height_cm)
}

#[wasm_bindgen]
pub fn percentile_label(percentile: f64) -> String {
    PercentileBand::from_percentile(percentile).label().to_string()
}

#[wasm_bindgen]
pub fn percentile_color(percentile: f64) -> String {
    PercentileBand::from_percentile(percentile).color().to_string()
}
