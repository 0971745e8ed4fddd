//! Priority tiers derived from a backend score.
//!
//! Bands are inclusive on their lower edge:
//! - High: score >= 80
//! - Medium: 50 <= score < 80
//! - Low: everything else
//!
//! No clamping: scores above 100 land in High, negative scores and NaN in Low.

use serde::{Deserialize, Serialize};

pub const HIGH_THRESHOLD: f64 = 80.0;
pub const MEDIUM_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
        }
    }
}

pub fn classify(score: f64) -> Tier {
    if score >= HIGH_THRESHOLD {
        Tier::High
    } else if score >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}
