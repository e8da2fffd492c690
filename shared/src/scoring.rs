//! Scoring engine
//!
//! Turns raw measurements into a score and then a percentile, per test.
//!
//! # Formula table
//!
//! | Test                 | Score                              | Percentile input (before fallback) |
//! |----------------------|------------------------------------|------------------------------------|
//! | Queen's College step | `111.33 − 0.42 × heart_rate`       | score                              |
//! | 20 m shuttle run     | `3.46 × (8 + (level − 1) × 0.5) + 14.4` | score                         |
//! | 1.6 km run           | `132.6 − 0.387 × minutes × 60`     | score                              |
//! | 400 m run            | seconds                            | `100 − s / 2`                      |
//! | 800 m run            | seconds                            | `100 − s / 4`                      |
//! | squat / push-up      | reps                               | `reps × 2`                         |
//! | pull-up              | reps                               | `reps × 10`                        |
//! | sit and reach        | cm                                 | `(cm + 20) × 2`                    |
//! | Illinois agility     | seconds                            | `100 − (s − 10) × 5`               |
//! | vertical jump        | cm                                 | `cm × 2`                           |
//! | 50 m sprint          | seconds                            | `100 − (s − 5) × 7`                |
//! | BMI                  | `kg / m²`                          | piecewise around 18.5–24.9, no fallback |
//!
//! The coefficients define the product's scoring semantics and must not drift.
//!
//! Percentiles currently ignore age and gender: there are no normative
//! tables yet, so every mapping is a placeholder over the score alone.

use crate::catalog::{self, TestDefinition, TestKind};
use crate::errors::{FitnessError, FitnessResult};
use crate::models::{Gender, TestResult};
use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Raw measurements keyed by input id
pub type Measurements = BTreeMap<String, f64>;

/// Lower edge of the healthy BMI band
pub const BMI_HEALTHY_MIN: f64 = 18.5;
/// Upper edge of the healthy BMI band
pub const BMI_HEALTHY_MAX: f64 = 24.9;

/// Generic score-to-percentile mapping: `clamp(round(x / 10 × 100), 0, 100)`
pub fn fallback_percentile(value: f64) -> f64 {
    ((value / 10.0) * 100.0).round().clamp(0.0, 100.0)
}

/// Clamp any percentile into `[0, 100]`
pub fn clamp_percentile(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Piecewise BMI percentile, peaking at the top of the healthy band
///
/// Inside `[18.5, 24.9]` the value rises linearly from 50 to 100; outside it
/// falls from 50 by 10 points per unit of BMI. The raw curve is unbounded.
pub fn bmi_percentile(bmi: f64) -> f64 {
    if bmi < BMI_HEALTHY_MIN {
        50.0 - (BMI_HEALTHY_MIN - bmi) * 10.0
    } else if bmi > BMI_HEALTHY_MAX {
        50.0 - (bmi - BMI_HEALTHY_MAX) * 10.0
    } else {
        50.0 + (bmi - BMI_HEALTHY_MIN) / (BMI_HEALTHY_MAX - BMI_HEALTHY_MIN) * 50.0
    }
}

fn value(inputs: &Measurements, id: &str) -> FitnessResult<f64> {
    inputs
        .get(id)
        .copied()
        .ok_or_else(|| FitnessError::missing_measurements(vec![id.to_string()]))
}

impl TestKind {
    /// Compute the raw score from measurements
    pub fn score(&self, inputs: &Measurements) -> FitnessResult<f64> {
        let score = match self {
            TestKind::QueensCollegeStep => 111.33 - (0.42 * value(inputs, "heart_rate")?),
            TestKind::ShuttleRun => {
                let level = value(inputs, "level")?;
                let speed = 8.0 + (level - 1.0) * 0.5;
                3.46 * speed + 14.4
            }
            TestKind::Run1600m => 132.6 - (0.387 * value(inputs, "time_in_minutes")? * 60.0),
            TestKind::Run400m
            | TestKind::Run800m
            | TestKind::IllinoisAgility
            | TestKind::Sprint50m => value(inputs, "time_in_seconds")?,
            TestKind::Squat | TestKind::PullUp | TestKind::PushUp => value(inputs, "reps")?,
            TestKind::SitAndReach => value(inputs, "cm_reached")?,
            TestKind::VerticalJump => value(inputs, "jump_height_cm")?,
            TestKind::Bmi => {
                let weight_kg = value(inputs, "weight_kg")?;
                let height_m = value(inputs, "height_m")?;
                let height_sq = height_m * height_m;
                if height_sq == 0.0 {
                    return Err(FitnessError::Computation(
                        "BMI requires a non-zero height".to_string(),
                    ));
                }
                weight_kg / height_sq
            }
        };

        if !score.is_finite() {
            return Err(FitnessError::Computation(format!(
                "score is not a finite number ({})",
                score
            )));
        }
        Ok(score)
    }

    /// Map a score to a percentile in `[0, 100]`
    ///
    /// Age and gender are accepted for the eventual normative lookup but are
    /// not consulted yet.
    pub fn percentile(&self, score: f64, _age: u32, _gender: Gender) -> f64 {
        let raw = match self {
            TestKind::QueensCollegeStep | TestKind::ShuttleRun | TestKind::Run1600m => {
                fallback_percentile(score)
            }
            TestKind::Run400m => fallback_percentile(100.0 - score / 2.0),
            TestKind::Run800m => fallback_percentile(100.0 - score / 4.0),
            TestKind::Squat | TestKind::PushUp | TestKind::VerticalJump => {
                fallback_percentile(score * 2.0)
            }
            TestKind::PullUp => fallback_percentile(score * 10.0),
            TestKind::SitAndReach => fallback_percentile((score + 20.0) * 2.0),
            TestKind::IllinoisAgility => fallback_percentile(100.0 - (score - 10.0) * 5.0),
            TestKind::Sprint50m => fallback_percentile(100.0 - (score - 5.0) * 7.0),
            TestKind::Bmi => bmi_percentile(score),
        };
        clamp_percentile(raw)
    }
}

impl TestDefinition {
    pub fn calculate_score(&self, inputs: &Measurements) -> FitnessResult<f64> {
        self.kind.score(inputs)
    }

    pub fn percentile(&self, score: f64, age: u32, gender: Gender) -> f64 {
        self.kind.percentile(score, age, gender)
    }

    /// Declared inputs absent from `inputs`, in declaration order
    pub fn missing_inputs(&self, inputs: &Measurements) -> Vec<String> {
        self.inputs
            .iter()
            .filter(|input| !inputs.contains_key(input.id))
            .map(|input| input.id.to_string())
            .collect()
    }
}

/// Score one test submission
///
/// Fails with `NotFound` for an unknown test, `Validation` when a declared
/// input is missing or not a finite number, and `Computation` when the
/// formula cannot produce a finite score. Undeclared extra inputs are ignored.
/// Storing the result is the caller's job.
pub fn submit_test(
    test_id: &str,
    raw_inputs: &Measurements,
    age: u32,
    gender: Gender,
) -> FitnessResult<TestResult> {
    let definition = catalog::require(test_id)?;

    let missing = definition.missing_inputs(raw_inputs);
    if !missing.is_empty() {
        return Err(FitnessError::missing_measurements(missing));
    }

    let non_finite: Vec<String> = definition
        .inputs
        .iter()
        .filter(|input| !raw_inputs[input.id].is_finite())
        .map(|input| input.id.to_string())
        .collect();
    if !non_finite.is_empty() {
        return Err(FitnessError::Validation {
            message: "Measurements must be valid numbers".to_string(),
            fields: non_finite,
        });
    }

    let score = definition.calculate_score(raw_inputs)?;
    let percentile = definition.percentile(score, age, gender);

    Ok(TestResult {
        id: Uuid::new_v4().to_string(),
        test_id: definition.id.to_string(),
        test_name: definition.name.to_string(),
        category: definition.category,
        score,
        percentile,
        recorded_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn measurements(pairs: &[(&str, f64)]) -> Measurements {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn score_of(test_id: &str, pairs: &[(&str, f64)]) -> f64 {
        catalog::get_by_id(test_id)
            .unwrap()
            .calculate_score(&measurements(pairs))
            .unwrap()
    }

    // =========================================================================
    // Worked examples
    // =========================================================================

    #[test]
    fn test_step_test_score() {
        let score = score_of("queens-college-step", &[("heart_rate", 80.0)]);
        assert!((score - 77.73).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_score_and_percentile() {
        let bmi = catalog::get_by_id("bmi-calculation").unwrap();
        let score = bmi
            .calculate_score(&measurements(&[("weight_kg", 50.0), ("height_m", 1.6)]))
            .unwrap();
        assert!((score - 19.53125).abs() < 1e-9);

        let percentile = bmi.percentile(score, 12, Gender::Male);
        let expected = 50.0 + (19.53125 - 18.5) / (24.9 - 18.5) * 50.0;
        assert!((percentile - expected).abs() < 1e-9);
        assert!((percentile - 58.06640625).abs() < 1e-6);
    }

    #[test]
    fn test_shuttle_run_ignores_shuttle_count() {
        let a = score_of("shuttle-run", &[("level", 5.0), ("shuttle", 1.0)]);
        let b = score_of("shuttle-run", &[("level", 5.0), ("shuttle", 12.0)]);
        assert_eq!(a, b);
        // speed = 8 + 4 * 0.5 = 10
        assert!((a - (3.46 * 10.0 + 14.4)).abs() < 1e-9);
    }

    #[test]
    fn test_run_1_6km_score() {
        let score = score_of("run-1-6km", &[("time_in_minutes", 10.0)]);
        assert!((score - (132.6 - 0.387 * 600.0)).abs() < 1e-9);
    }

    // =========================================================================
    // Formula table
    // =========================================================================

    #[rstest]
    #[case("queens-college-step", &[("heart_rate", 200.0)], 27.33, 100.0)]
    #[case("queens-college-step", &[("heart_rate", 260.0)], 2.13, 21.0)]
    #[case("shuttle-run", &[("level", 1.0), ("shuttle", 1.0)], 42.08, 100.0)]
    #[case("run-1-6km", &[("time_in_minutes", 5.7)], 0.246, 2.0)]
    #[case("run-400m", &[("time_in_seconds", 90.0)], 90.0, 100.0)]
    #[case("run-400m", &[("time_in_seconds", 199.0)], 199.0, 5.0)]
    #[case("run-800m", &[("time_in_seconds", 398.0)], 398.0, 5.0)]
    #[case("squat-test", &[("reps", 3.0)], 3.0, 60.0)]
    #[case("pushup-test", &[("reps", 0.0)], 0.0, 0.0)]
    #[case("pull-up-test", &[("reps", 0.5)], 0.5, 50.0)]
    #[case("pull-up-test", &[("reps", 2.0)], 2.0, 100.0)]
    #[case("sit-and-reach", &[("cm_reached", -18.0)], -18.0, 40.0)]
    #[case("sit-and-reach", &[("cm_reached", -20.0)], -20.0, 0.0)]
    #[case("illinois-agility", &[("time_in_seconds", 29.0)], 29.0, 50.0)]
    #[case("vertical-jump", &[("jump_height_cm", 2.5)], 2.5, 50.0)]
    #[case("sprint-50m", &[("time_in_seconds", 19.0)], 19.0, 20.0)]
    #[case("sprint-50m", &[("time_in_seconds", 5.0)], 5.0, 100.0)]
    #[case("bmi-calculation", &[("weight_kg", 64.0), ("height_m", 1.6)], 25.0, 49.0)]
    fn test_formula_table(
        #[case] test_id: &str,
        #[case] inputs: &[(&str, f64)],
        #[case] expected_score: f64,
        #[case] expected_percentile: f64,
    ) {
        let definition = catalog::get_by_id(test_id).unwrap();
        let score = definition.calculate_score(&measurements(inputs)).unwrap();
        assert!(
            (score - expected_score).abs() < 1e-6,
            "{}: score {} != {}",
            test_id,
            score,
            expected_score
        );
        let percentile = definition.percentile(score, 12, Gender::Female);
        assert!(
            (percentile - expected_percentile).abs() < 1e-6,
            "{}: percentile {} != {}",
            test_id,
            percentile,
            expected_percentile
        );
    }

    #[test]
    fn test_every_catalog_entry_scores_its_declared_inputs() {
        for definition in catalog::all_tests() {
            let inputs: Measurements = definition
                .inputs
                .iter()
                .map(|input| (input.id.to_string(), input.max.unwrap_or(1.0)))
                .collect();
            let score = definition.calculate_score(&inputs).unwrap();
            let percentile = definition.percentile(score, 12, Gender::Male);
            assert!(score.is_finite(), "{}", definition.id);
            assert!((0.0..=100.0).contains(&percentile), "{}", definition.id);
        }
    }

    // =========================================================================
    // BMI band
    // =========================================================================

    #[test]
    fn test_bmi_percentile_band_edges() {
        assert!((bmi_percentile(18.5) - 50.0).abs() < 1e-9);
        assert!((bmi_percentile(24.9) - 100.0).abs() < 1e-9);
        assert!((bmi_percentile(17.5) - 40.0).abs() < 1e-9);
        assert!((bmi_percentile(26.9) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_percentile_is_clamped_for_extremes() {
        assert!(bmi_percentile(5.0) < 0.0);
        let bmi = catalog::get_by_id("bmi-calculation").unwrap();
        assert_eq!(bmi.percentile(5.0, 12, Gender::Male), 0.0);
        assert_eq!(bmi.percentile(40.0, 12, Gender::Male), 0.0);
    }

    #[test]
    fn test_bmi_zero_height_is_computation_error() {
        let bmi = catalog::get_by_id("bmi-calculation").unwrap();
        let err = bmi
            .calculate_score(&measurements(&[("weight_kg", 50.0), ("height_m", 0.0)]))
            .unwrap_err();
        assert!(matches!(err, FitnessError::Computation(_)));
    }

    // =========================================================================
    // submit_test
    // =========================================================================

    #[test]
    fn test_submit_test_builds_result() {
        let result = submit_test(
            "queens-college-step",
            &measurements(&[("heart_rate", 80.0)]),
            12,
            Gender::Male,
        )
        .unwrap();
        assert_eq!(result.test_id, "queens-college-step");
        assert_eq!(result.test_name, "Queen's College Step Test");
        assert_eq!(result.category, crate::catalog::TestCategory::Endurance);
        assert!((result.score - 77.73).abs() < 1e-9);
        assert_eq!(result.percentile, 100.0);
        assert!(Uuid::parse_str(&result.id).is_ok());
    }

    #[test]
    fn test_submit_test_fresh_ids() {
        let inputs = measurements(&[("reps", 10.0)]);
        let a = submit_test("squat-test", &inputs, 12, Gender::Male).unwrap();
        let b = submit_test("squat-test", &inputs, 12, Gender::Male).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_submit_test_unknown_test() {
        let err = submit_test("bench-press", &Measurements::new(), 12, Gender::Male).unwrap_err();
        assert_eq!(err, FitnessError::test_not_found("bench-press"));
    }

    #[test]
    fn test_submit_test_missing_inputs_lists_all_missing() {
        let err = submit_test("shuttle-run", &Measurements::new(), 12, Gender::Male).unwrap_err();
        match err {
            FitnessError::Validation { fields, .. } => {
                assert_eq!(fields, vec!["level".to_string(), "shuttle".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_test_partial_inputs_rejected() {
        let err = submit_test(
            "bmi-calculation",
            &measurements(&[("weight_kg", 50.0)]),
            12,
            Gender::Female,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("height_m"));
    }

    #[test]
    fn test_submit_test_rejects_nan() {
        let err = submit_test(
            "squat-test",
            &measurements(&[("reps", f64::NAN)]),
            12,
            Gender::Female,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("reps"));
    }

    #[test]
    fn test_submit_test_ignores_extra_inputs() {
        let result = submit_test(
            "squat-test",
            &measurements(&[("reps", 20.0), ("unused", 3.0)]),
            12,
            Gender::Female,
        )
        .unwrap();
        assert_eq!(result.score, 20.0);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Fallback mapper never leaves [0, 100]
        #[test]
        fn prop_fallback_percentile_clamped(score in -1.0e6f64..1.0e6) {
            let p = fallback_percentile(score);
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn prop_fallback_percentile_saturates(score in 10.0f64..1.0e6) {
            prop_assert_eq!(fallback_percentile(score), 100.0);
            prop_assert_eq!(fallback_percentile(-score), 0.0);
        }

        /// Scoring is a pure function of its inputs
        #[test]
        fn prop_score_deterministic(
            index in 0usize..13,
            raw in prop::collection::vec(-50.0f64..300.0, 2)
        ) {
            let definition = &catalog::all_tests()[index];
            let inputs: Measurements = definition
                .inputs
                .iter()
                .zip(raw.iter())
                .map(|(input, v)| (input.id.to_string(), *v))
                .collect();
            let first = definition.calculate_score(&inputs);
            let second = definition.calculate_score(&inputs);
            prop_assert_eq!(first.clone(), second);
            if let Ok(score) = first {
                prop_assert_eq!(
                    definition.percentile(score, 10, Gender::Male),
                    definition.percentile(score, 10, Gender::Male)
                );
            }
        }

        /// Every percentile mapper stays in range, BMI included
        #[test]
        fn prop_percentile_in_range(index in 0usize..13, score in -1.0e4f64..1.0e4) {
            let definition = &catalog::all_tests()[index];
            let p = definition.percentile(score, 12, Gender::Female);
            prop_assert!((0.0..=100.0).contains(&p), "{} -> {}", definition.id, p);
        }
    }
}
