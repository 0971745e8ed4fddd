//! Scoring strategies and the selector holding the active one.
//!
//! The scoring service owns what each strategy means; here they are only
//! identifiers forwarded with the analyze request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Wire identifier.
    pub fn id(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "Smart Balance",
            Strategy::FastestWins => "Fastest Wins",
            Strategy::HighImpact => "High Impact",
            Strategy::DeadlineDriven => "Deadline Driven",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Strategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.id() == s)
            .ok_or_else(|| ValidationError::UnknownStrategy(s.to_string()))
    }
}

/// Holds exactly one active strategy; defaults to `smart_balance`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrategySelector {
    active: Strategy,
}

impl StrategySelector {
    pub fn new(initial: Strategy) -> Self {
        Self { active: initial }
    }

    pub fn get(&self) -> Strategy {
        self.active
    }

    pub fn set(&mut self, strategy: Strategy) {
        self.active = strategy;
    }

    /// Select by wire id. On rejection the active strategy is untouched.
    pub fn select(&mut self, id: &str) -> Result<Strategy, ValidationError> {
        let strategy: Strategy = id.parse()?;
        self.active = strategy;
        Ok(strategy)
    }
}
