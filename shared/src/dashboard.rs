//! Dashboard summary for a single profile
//!
//! Aggregates a profile's results into the figures shown on the dashboard:
//! counts, overall and per-category averages, body BMI, a chronological
//! timeline and the most recent results.

use crate::catalog::TestCategory;
use crate::models::{Profile, TestResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Percentile Bands
// ============================================================================

/// Qualitative band for a percentile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl PercentileBand {
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile >= 80.0 {
            PercentileBand::Excellent
        } else if percentile >= 60.0 {
            PercentileBand::Good
        } else if percentile >= 40.0 {
            PercentileBand::Average
        } else if percentile >= 20.0 {
            PercentileBand::BelowAverage
        } else {
            PercentileBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::Excellent => "Excellent",
            PercentileBand::Good => "Good",
            PercentileBand::Average => "Average",
            PercentileBand::BelowAverage => "Below Average",
            PercentileBand::Poor => "Poor",
        }
    }

    /// Hex colour used for charts and badges
    pub fn color(&self) -> &'static str {
        match self {
            PercentileBand::Excellent => "#22c55e",
            PercentileBand::Good => "#3b82f6",
            PercentileBand::Average => "#eab308",
            PercentileBand::BelowAverage => "#f97316",
            PercentileBand::Poor => "#ef4444",
        }
    }
}

// ============================================================================
// BMI
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI from weight (kg) and height (cm), rounded to one decimal
///
/// Returns 0 when the height is not positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm.is_nan() || height_cm <= 0.0 || !weight_kg.is_finite() {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 1)
}

pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandInfo {
    pub band: PercentileBand,
    pub label: String,
    pub color: String,
}

impl From<PercentileBand> for BandInfo {
    fn from(band: PercentileBand) -> Self {
        Self {
            band,
            label: band.label().to_string(),
            color: band.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub category: TestCategory,
    pub label: String,
    pub icon: String,
    /// Rounded mean percentile
    pub percentile: f64,
    pub count: usize,
    pub band: BandInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub test_id: String,
    pub name: String,
    pub category: TestCategory,
    pub percentile: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_category: Option<BmiCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub profile_id: String,
    pub name: String,
    pub tests_taken: usize,
    pub categories_tested: usize,
    /// Rounded mean percentile over all results, 0 when there are none
    pub overall_average: f64,
    pub overall_band: BandInfo,
    pub body: BodyMetrics,
    pub category_averages: Vec<CategoryAverage>,
    pub timeline: Vec<TimelinePoint>,
    pub recent_tests: Vec<TestResult>,
}

impl DashboardSummary {
    pub fn build(profile: &Profile, recent_limit: usize) -> Self {
        let category_averages = category_averages(&profile.results);
        let average = profile.average_percentile();
        let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);

        let mut timeline: Vec<TimelinePoint> = profile
            .results
            .iter()
            .map(|r| TimelinePoint {
                test_id: r.test_id.clone(),
                name: r.test_name.clone(),
                category: r.category,
                percentile: r.percentile,
                recorded_at: r.recorded_at,
            })
            .collect();
        timeline.sort_by_key(|p| p.recorded_at);

        let mut recent_tests = profile.results.clone();
        recent_tests.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        recent_tests.truncate(recent_limit);

        Self {
            profile_id: profile.id.clone(),
            name: profile.name.clone(),
            tests_taken: profile.results.len(),
            categories_tested: category_averages.len(),
            overall_average: average.round(),
            overall_band: PercentileBand::from_percentile(average).into(),
            body: BodyMetrics {
                weight_kg: profile.weight_kg,
                height_cm: profile.height_cm,
                bmi,
                bmi_category: (bmi > 0.0).then(|| classify_bmi(bmi)),
            },
            category_averages,
            timeline,
            recent_tests,
        }
    }
}

/// Mean percentile per category, in the order categories first appear
///
/// The band is taken from the unrounded mean.
pub fn category_averages(results: &[TestResult]) -> Vec<CategoryAverage> {
    let mut groups: Vec<(TestCategory, Vec<f64>)> = Vec::new();
    for result in results {
        match groups.iter_mut().find(|(c, _)| *c == result.category) {
            Some((_, percentiles)) => percentiles.push(result.percentile),
            None => groups.push((result.category, vec![result.percentile])),
        }
    }

    groups
        .into_iter()
        .map(|(category, percentiles)| {
            let mean = percentiles.iter().sum::<f64>() / percentiles.len() as f64;
            let info = category.info();
            CategoryAverage {
                category,
                label: info.label.to_string(),
                icon: info.icon.to_string(),
                percentile: mean.round(),
                count: percentiles.len(),
                band: PercentileBand::from_percentile(mean).into(),
            }
        })
        .collect()
}
