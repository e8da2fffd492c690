//! Leaderboard ranking
//!
//! Ranks a viewer against their peers, either on a single test's percentile
//! or on the mean percentile across all of a profile's results. Ranking is
//! recomputed on demand and never stored.
//!
//! Ordering is descending by score with a stable sort, so profiles with equal
//! scores keep their input order and identical inputs always give an
//! identical leaderboard.

use crate::models::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the leaderboard ranks by
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaderboardMetric {
    /// Mean percentile across every result
    #[default]
    Overall,
    /// Percentile of one test
    Test(String),
}

impl LeaderboardMetric {
    pub const OVERALL: &'static str = "overall";

    pub fn as_str(&self) -> &str {
        match self {
            LeaderboardMetric::Overall => Self::OVERALL,
            LeaderboardMetric::Test(id) => id,
        }
    }
}

impl From<String> for LeaderboardMetric {
    fn from(value: String) -> Self {
        if value == Self::OVERALL {
            LeaderboardMetric::Overall
        } else {
            LeaderboardMetric::Test(value)
        }
    }
}

impl From<LeaderboardMetric> for String {
    fn from(metric: LeaderboardMetric) -> Self {
        metric.as_str().to_string()
    }
}

impl FromStr for LeaderboardMetric {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LeaderboardMetric::from(s.to_string()))
    }
}

impl fmt::Display for LeaderboardMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub score: f64,
    pub is_viewer: bool,
}

/// A ranked leaderboard for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub metric: LeaderboardMetric,
    pub label: String,
    pub entries: Vec<LeaderboardEntry>,
    /// 1-based rank of the viewer; always present since the viewer is included
    pub viewer_rank: usize,
    pub viewer_score: f64,
    pub total: usize,
}

/// Medal awarded to the top three places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

pub fn medal(rank: usize) -> Option<Medal> {
    match rank {
        1 => Some(Medal::Gold),
        2 => Some(Medal::Silver),
        3 => Some(Medal::Bronze),
        _ => None,
    }
}

/// Peers sharing the viewer's class (all peers if the viewer has none),
/// with the viewer appended unless a peer already carries the same id
pub fn peer_group<'a>(peers: &'a [Profile], viewer: &'a Profile) -> Vec<&'a Profile> {
    let mut group: Vec<&Profile> = match viewer.class_name() {
        Some(class) => peers
            .iter()
            .filter(|p| p.class.as_deref() == Some(class))
            .collect(),
        None => peers.iter().collect(),
    };

    if !group.iter().any(|p| p.id == viewer.id) {
        group.push(viewer);
    }
    group
}

/// A profile's score under a metric; 0 when it has no matching result
pub fn score_for(profile: &Profile, metric: &LeaderboardMetric) -> f64 {
    match metric {
        LeaderboardMetric::Overall => profile.average_percentile(),
        LeaderboardMetric::Test(test_id) => profile
            .result_for(test_id)
            .map(|r| r.percentile)
            .unwrap_or(0.0),
    }
}

/// Rank the viewer's peer group on a metric
pub fn rank(peers: &[Profile], viewer: &Profile, metric: &LeaderboardMetric) -> Leaderboard {
    let group = peer_group(peers, viewer);

    let mut scored: Vec<(&Profile, f64)> = group
        .into_iter()
        .map(|p| (p, score_for(p, metric)))
        .collect();
    // sort_by is stable: ties keep input order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let entries: Vec<LeaderboardEntry> = scored
        .into_iter()
        .enumerate()
        .map(|(i, (profile, score))| LeaderboardEntry {
            rank: i + 1,
            id: profile.id.clone(),
            name: profile.name.clone(),
            score,
            is_viewer: profile.id == viewer.id,
        })
        .collect();

    let viewer_entry = entries.iter().find(|e| e.is_viewer);
    let viewer_rank = viewer_entry.map(|e| e.rank).unwrap_or(0);
    let viewer_score = viewer_entry.map(|e| e.score).unwrap_or(0.0);

    Leaderboard {
        label: metric_label(metric, peers, viewer),
        metric: metric.clone(),
        total: entries.len(),
        entries,
        viewer_rank,
        viewer_score,
    }
}

/// Metrics worth offering: `overall`, then each test id seen in the peer
/// group or the viewer's results, in first-seen order
pub fn available_metrics(peers: &[Profile], viewer: &Profile) -> Vec<LeaderboardMetric> {
    let mut metrics = vec![LeaderboardMetric::Overall];
    for profile in peers.iter().chain(std::iter::once(viewer)) {
        for result in &profile.results {
            let metric = LeaderboardMetric::Test(result.test_id.clone());
            if !metrics.contains(&metric) {
                metrics.push(metric);
            }
        }
    }
    metrics
}

/// Display name for a metric: "Overall", a result's test name, or the raw id
pub fn metric_label(metric: &LeaderboardMetric, peers: &[Profile], viewer: &Profile) -> String {
    match metric {
        LeaderboardMetric::Overall => "Overall".to_string(),
        LeaderboardMetric::Test(test_id) => peer_group(peers, viewer)
            .into_iter()
            .find_map(|p| p.result_for(test_id))
            .map(|r| r.test_name.clone())
            .unwrap_or_else(|| test_id.clone()),
    }
}
