//! Scored tasks as returned by the scoring service.
//!
//! These are never built locally; they are decoded from responses and then
//! only read. `due_date` stays textual since saved suggestions may predate
//! any local validation.

use serde::{Deserialize, Serialize};

use crate::tier::{classify, Tier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    pub title: String,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub estimated_hours: f64,

    #[serde(default)]
    pub importance: f64,

    #[serde(default)]
    pub dependencies: Vec<String>,

    pub score: f64,

    #[serde(default)]
    pub explanation: String,

    /// Saved-record id; present on suggestions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl ScoredTask {
    pub fn tier(&self) -> Tier {
        classify(self.score)
    }
}
