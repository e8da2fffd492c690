//! Fitness test catalog
//!
//! The immutable table of every test the application knows about, plus the
//! category metadata used for grouping. Entries are declared once as static
//! data and looked up by id; nothing here is mutated at runtime.
//!
//! Score and percentile formulas live in [`crate::scoring`], keyed by
//! [`TestKind`], so every entry shares the same pure signatures.

use crate::errors::{FitnessError, FitnessResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Categories
// ============================================================================

/// Fitness category a test belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    Endurance,
    Strength,
    Flexibility,
    BodyComposition,
    Agility,
    Jumping,
    Sprint,
}

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
}

impl TestCategory {
    /// All categories in declaration order
    pub const ALL: [TestCategory; 7] = [
        TestCategory::Endurance,
        TestCategory::Strength,
        TestCategory::Flexibility,
        TestCategory::BodyComposition,
        TestCategory::Agility,
        TestCategory::Jumping,
        TestCategory::Sprint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestCategory::Endurance => "endurance",
            TestCategory::Strength => "strength",
            TestCategory::Flexibility => "flexibility",
            TestCategory::BodyComposition => "body_composition",
            TestCategory::Agility => "agility",
            TestCategory::Jumping => "jumping",
            TestCategory::Sprint => "sprint",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        match self {
            TestCategory::Endurance => CategoryInfo {
                label: "Endurance & Running",
                icon: "🏃‍♂️",
            },
            TestCategory::Strength => CategoryInfo {
                label: "Strength & Power",
                icon: "🏋️‍♀️",
            },
            TestCategory::Flexibility => CategoryInfo {
                label: "Flexibility & Mobility",
                icon: "🤸‍♀️",
            },
            TestCategory::BodyComposition => CategoryInfo {
                label: "Body Composition",
                icon: "⚖️",
            },
            TestCategory::Agility => CategoryInfo {
                label: "Agility & Balance",
                icon: "🧠",
            },
            TestCategory::Jumping => CategoryInfo {
                label: "Jumping Ability",
                icon: "🦘",
            },
            TestCategory::Sprint => CategoryInfo {
                label: "Sprint",
                icon: "🏃‍♂️",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }
}

impl fmt::Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TestCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown test category: {}", s))
    }
}

// ============================================================================
// Test definitions
// ============================================================================

/// Strategy tag selecting a test's score and percentile formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKind {
    QueensCollegeStep,
    ShuttleRun,
    Run1600m,
    Run400m,
    Run800m,
    Squat,
    PullUp,
    PushUp,
    SitAndReach,
    Bmi,
    IllinoisAgility,
    VerticalJump,
    Sprint50m,
}

/// One required numeric field of a test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementInput {
    pub id: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

/// Immutable definition of a single fitness assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestDefinition {
    #[serde(skip)]
    pub kind: TestKind,
    pub id: &'static str,
    pub name: &'static str,
    pub category: TestCategory,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub inputs: &'static [MeasurementInput],
}

impl TestDefinition {
    /// Look up a declared input by id
    pub fn input(&self, id: &str) -> Option<&'static MeasurementInput> {
        self.inputs.iter().find(|input| input.id == id)
    }
}

const fn input(
    id: &'static str,
    label: &'static str,
    unit: &'static str,
    min: f64,
    max: f64,
    step: Option<f64>,
) -> MeasurementInput {
    MeasurementInput {
        id,
        label,
        unit,
        min: Some(min),
        max: Some(max),
        step,
    }
}

static TESTS: [TestDefinition; 13] = [
    TestDefinition {
        kind: TestKind::QueensCollegeStep,
        id: "queens-college-step",
        name: "Queen's College Step Test",
        category: TestCategory::Endurance,
        description: "This test estimates cardiovascular fitness by measuring heart rate recovery after stepping up and down a platform.",
        instructions: &[
            "Find a 16.25-inch (41.3 cm) step or platform",
            "Step up and down for 3 minutes (males) or 3 minutes (females)",
            "Males: 24 steps per minute, Females: 22 steps per minute",
            "Immediately after completing the test, count heart rate for 15 seconds and multiply by 4",
        ],
        inputs: &[input("heart_rate", "Heart Rate (15s after test)", "bpm", 40.0, 220.0, None)],
    },
    TestDefinition {
        kind: TestKind::ShuttleRun,
        id: "shuttle-run",
        name: "20 Metre Shuttle Run",
        category: TestCategory::Endurance,
        description: "The shuttle run test measures aerobic endurance by having participants run back and forth between markers.",
        instructions: &[
            "Place two markers 20 meters apart",
            "Run back and forth between the markers following the beeps",
            "Continue until you can no longer reach the marker before the beep sounds",
            "Record the level and shuttle you completed",
        ],
        inputs: &[
            input("level", "Level", "", 1.0, 21.0, None),
            input("shuttle", "Shuttle", "", 1.0, 15.0, None),
        ],
    },
    TestDefinition {
        kind: TestKind::Run1600m,
        id: "run-1-6km",
        name: "1.6 km Run Test",
        category: TestCategory::Endurance,
        description: "The 1.6 km run test measures aerobic fitness by timing how long it takes to run 1.6 kilometers.",
        instructions: &[
            "Mark a 1.6 kilometer course",
            "Run/walk the course as quickly as possible",
            "Record the total time in minutes and seconds",
        ],
        inputs: &[input("time_in_minutes", "Time", "minutes", 3.0, 30.0, Some(0.01))],
    },
    TestDefinition {
        kind: TestKind::Run400m,
        id: "run-400m",
        name: "400 Metre Run Test",
        category: TestCategory::Endurance,
        description: "The 400m run test measures speed endurance.",
        instructions: &[
            "Mark a 400 meter course or use a standard track",
            "Run the course as quickly as possible",
            "Record the total time in seconds",
        ],
        inputs: &[input("time_in_seconds", "Time", "seconds", 30.0, 300.0, Some(0.1))],
    },
    TestDefinition {
        kind: TestKind::Run800m,
        id: "run-800m",
        name: "800 Metre Run Test",
        category: TestCategory::Endurance,
        description: "The 800m run test measures middle-distance running ability.",
        instructions: &[
            "Mark an 800 meter course or use a standard track",
            "Run the course as quickly as possible",
            "Record the total time in seconds",
        ],
        inputs: &[input("time_in_seconds", "Time", "seconds", 60.0, 600.0, Some(0.1))],
    },
    TestDefinition {
        kind: TestKind::Squat,
        id: "squat-test",
        name: "Squat Test",
        category: TestCategory::Strength,
        description: "The squat test measures lower body strength and endurance.",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Perform as many bodyweight squats as possible in 1 minute",
            "Count only proper form squats (thighs parallel to ground)",
        ],
        inputs: &[input("reps", "Repetitions", "reps", 0.0, 100.0, None)],
    },
    TestDefinition {
        kind: TestKind::PullUp,
        id: "pull-up-test",
        name: "Pull-Up Test",
        category: TestCategory::Strength,
        description: "The pull-up test measures upper body strength.",
        instructions: &[
            "Hang from a bar with palms facing away",
            "Pull up until chin is above the bar",
            "Lower completely and repeat",
            "Count total number of proper form pull-ups",
        ],
        inputs: &[input("reps", "Repetitions", "reps", 0.0, 50.0, None)],
    },
    TestDefinition {
        kind: TestKind::PushUp,
        id: "pushup-test",
        name: "Timed Push-Ups Test",
        category: TestCategory::Strength,
        description: "The push-up test measures upper body strength and endurance.",
        instructions: &[
            "Start in plank position with arms straight",
            "Lower until elbows are at 90 degrees",
            "Perform as many push-ups as possible in 1 minute",
            "Count only proper form push-ups",
        ],
        inputs: &[input("reps", "Repetitions", "reps", 0.0, 100.0, None)],
    },
    TestDefinition {
        kind: TestKind::SitAndReach,
        id: "sit-and-reach",
        name: "Sit and Reach Test",
        category: TestCategory::Flexibility,
        description: "The sit and reach test measures flexibility of the lower back and hamstrings.",
        instructions: &[
            "Sit with legs extended and feet against a box",
            "Reach forward as far as possible with both hands",
            "Measure the distance reached beyond toes (positive) or before toes (negative)",
        ],
        inputs: &[input("cm_reached", "Distance Reached", "cm", -20.0, 40.0, Some(0.5))],
    },
    TestDefinition {
        kind: TestKind::Bmi,
        id: "bmi-calculation",
        name: "BMI Calculation",
        category: TestCategory::BodyComposition,
        description: "Body Mass Index is a measure of body fat based on height and weight.",
        instructions: &[
            "Measure weight in kilograms",
            "Measure height in meters",
            "The system will calculate BMI using the formula: weight / (height^2)",
        ],
        inputs: &[
            input("weight_kg", "Weight", "kg", 20.0, 150.0, Some(0.1)),
            input("height_m", "Height", "m", 0.5, 2.5, Some(0.01)),
        ],
    },
    TestDefinition {
        kind: TestKind::IllinoisAgility,
        id: "illinois-agility",
        name: "Illinois Agility Test",
        category: TestCategory::Agility,
        description: "The Illinois Agility Test measures agility and direction change ability.",
        instructions: &[
            "Set up the course with cones as per standard Illinois test layout",
            "Start lying face down at the starting line",
            "On 'Go', complete the course as quickly as possible",
            "Record the time taken to complete the course",
        ],
        inputs: &[input("time_in_seconds", "Time", "seconds", 10.0, 30.0, Some(0.01))],
    },
    TestDefinition {
        kind: TestKind::VerticalJump,
        id: "vertical-jump",
        name: "Vertical Jump Test",
        category: TestCategory::Jumping,
        description: "The vertical jump test measures leg power and explosiveness.",
        instructions: &[
            "Stand next to a wall with arm extended upward",
            "Mark the highest point you can reach while standing flat-footed",
            "Jump as high as possible and touch the wall at the highest point",
            "Measure the difference between standing reach and jump height",
        ],
        inputs: &[input("jump_height_cm", "Jump Height", "cm", 0.0, 100.0, Some(0.5))],
    },
    TestDefinition {
        kind: TestKind::Sprint50m,
        id: "sprint-50m",
        name: "50 Metre Sprint",
        category: TestCategory::Sprint,
        description: "The 50m sprint test measures acceleration and speed.",
        instructions: &[
            "Mark a straight 50 meter course",
            "Start from a standing position",
            "Sprint as fast as possible through the finish line",
            "Record the time to complete the distance",
        ],
        inputs: &[input("time_in_seconds", "Time", "seconds", 5.0, 20.0, Some(0.01))],
    },
];

// ============================================================================
// Lookup
// ============================================================================

/// Every test definition in declaration order
pub fn all_tests() -> &'static [TestDefinition] {
    &TESTS
}

/// Exact-match lookup by id. `None` means the test does not exist.
pub fn get_by_id(id: &str) -> Option<&'static TestDefinition> {
    TESTS.iter().find(|test| test.id == id)
}

/// Like [`get_by_id`], but reports absence as [`FitnessError::NotFound`]
pub fn require(id: &str) -> FitnessResult<&'static TestDefinition> {
    get_by_id(id).ok_or_else(|| FitnessError::test_not_found(id))
}

/// All tests in a category, in declaration order
pub fn get_by_category(category: TestCategory) -> Vec<&'static TestDefinition> {
    TESTS
        .iter()
        .filter(|test| test.category == category)
        .collect()
}

/// The fixed category list, in declaration order
pub fn list_categories() -> &'static [TestCategory] {
    &TestCategory::ALL
}
