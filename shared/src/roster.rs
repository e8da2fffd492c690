//! Demo classmate roster
//!
//! A fixed set of students used as leaderboard peers and for the mock login.
//! The login is a convenience for demos and performs no authentication.

use crate::catalog::TestCategory;
use crate::errors::{FitnessError, FitnessResult};
use crate::models::{Gender, Profile, TestResult};
use chrono::{DateTime, NaiveDate, Utc};

struct SeedResult {
    id: &'static str,
    test_id: &'static str,
    test_name: &'static str,
    category: TestCategory,
    score: f64,
    percentile: f64,
    date: (i32, u32, u32),
}

struct SeedStudent {
    id: &'static str,
    name: &'static str,
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    gender: Gender,
    school: &'static str,
    class: &'static str,
    results: [SeedResult; 2],
}

const fn push_ups(id: &'static str, score: f64, percentile: f64, day: u32) -> SeedResult {
    SeedResult {
        id,
        test_id: "push-ups",
        test_name: "Push-ups",
        category: TestCategory::Strength,
        score,
        percentile,
        date: (2023, 3, day),
    }
}

const fn mile_run(id: &'static str, score: f64, percentile: f64, day: u32) -> SeedResult {
    SeedResult {
        id,
        test_id: "mile-run",
        test_name: "Mile Run",
        category: TestCategory::Endurance,
        score,
        percentile,
        date: (2023, 3, day),
    }
}

static STUDENTS: [SeedStudent; 5] = [
    SeedStudent {
        id: "S1001",
        name: "Alex Johnson",
        age: 12,
        weight_kg: 45.0,
        height_cm: 152.0,
        gender: Gender::Male,
        school: "Springfield Elementary",
        class: "6A",
        results: [push_ups("t1", 25.0, 85.0, 15), mile_run("t2", 8.5, 72.0, 10)],
    },
    SeedStudent {
        id: "S1002",
        name: "Emma Davis",
        age: 11,
        weight_kg: 40.0,
        height_cm: 148.0,
        gender: Gender::Female,
        school: "Springfield Elementary",
        class: "5B",
        results: [push_ups("t3", 15.0, 78.0, 12), mile_run("t4", 9.2, 65.0, 8)],
    },
    SeedStudent {
        id: "S1003",
        name: "Jason Smith",
        age: 13,
        weight_kg: 50.0,
        height_cm: 162.0,
        gender: Gender::Male,
        school: "Riverside Middle School",
        class: "7C",
        results: [push_ups("t5", 30.0, 90.0, 14), mile_run("t6", 7.8, 82.0, 9)],
    },
    SeedStudent {
        id: "S1004",
        name: "Sophia Lee",
        age: 12,
        weight_kg: 42.0,
        height_cm: 155.0,
        gender: Gender::Female,
        school: "Springfield Elementary",
        class: "6A",
        results: [push_ups("t7", 18.0, 82.0, 13), mile_run("t8", 8.1, 76.0, 11)],
    },
    SeedStudent {
        id: "S1005",
        name: "Oliver Wilson",
        age: 12,
        weight_kg: 46.0,
        height_cm: 158.0,
        gender: Gender::Male,
        school: "Springfield Elementary",
        class: "6A",
        results: [push_ups("t9", 22.0, 80.0, 10), mile_run("t10", 8.7, 71.0, 15)],
    },
];

fn seed_date((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

impl SeedStudent {
    fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.to_string(),
            name: self.name.to_string(),
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            gender: self.gender,
            school: Some(self.school.to_string()),
            class: Some(self.class.to_string()),
            results: self
                .results
                .iter()
                .map(|r| TestResult {
                    id: r.id.to_string(),
                    test_id: r.test_id.to_string(),
                    test_name: r.test_name.to_string(),
                    category: r.category,
                    score: r.score,
                    percentile: r.percentile,
                    recorded_at: seed_date(r.date),
                })
                .collect(),
        }
    }
}

/// The demo classmates with their seeded results
pub fn demo_classmates() -> Vec<Profile> {
    STUDENTS.iter().map(SeedStudent::to_profile).collect()
}

/// Look a student up by id and name, both case-insensitive
///
/// The returned profile starts with no results, matching a fresh login.
pub fn find_student(roster: &[Profile], student_id: &str, name: &str) -> FitnessResult<Profile> {
    let student_id = student_id.trim();
    let name = name.trim();

    roster
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(student_id) && s.name.to_lowercase() == name.to_lowercase())
        .map(|s| Profile {
            results: Vec::new(),
            ..s.clone()
        })
        .ok_or_else(|| FitnessError::student_not_found(student_id))
}
