//! Local validation failures.
//!
//! Everything here is detected before any network activity. Messages are
//! user-facing sentences; the session shows them verbatim.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    EmptyTitle,

    #[error("Estimated hours must be zero or greater.")]
    InvalidHours,

    #[error("Importance must be between 0 and 10.")]
    InvalidImportance,

    #[error("due_date must be in YYYY-MM-DD format (got '{0}').")]
    InvalidDueDate(String),

    #[error("Dependencies must be comma separated text or a list of names.")]
    InvalidDependencies,

    #[error("JSON must be an array of tasks.")]
    NotAnArray,

    #[error("No tasks found in JSON array.")]
    EmptyArray,

    /// Parser diagnostic, passed through untouched.
    #[error("{0}")]
    MalformedPayload(String),

    #[error("Each task must be an object (element {index}).")]
    NotAnObject { index: usize },

    /// A bulk element failed normalization; the whole batch is rejected.
    #[error("Task at index {index}: {source}")]
    InvalidElement {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    #[error(
        "Unknown strategy '{0}'. Expected one of: smart_balance, fastest_wins, high_impact, deadline_driven."
    )]
    UnknownStrategy(String),

    #[error("Add at least one task before analyzing.")]
    NoTasksQueued,
}

impl ValidationError {
    /// Strip `InvalidElement` wrappers and return the field-level cause.
    pub fn root(&self) -> &ValidationError {
        match self {
            ValidationError::InvalidElement { source, .. } => source.root(),
            other => other,
        }
    }
}
