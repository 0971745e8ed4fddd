//! Normalizer: RawTask -> Task, or the first field-level failure.
//!
//! Checks run in a fixed order (title, hours, importance, due date,
//! dependencies) so the reported error is deterministic.
//!
//! Coercion rules for numeric fields:
//! - JSON numbers pass through
//! - text is trimmed and parsed as a decimal
//! - absent / null / blank text coerce to 0 (the scoring service default)
//! - anything else, or a non-finite result, is rejected

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::ValidationError;
use crate::task::{RawTask, Task};

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

pub const MAX_IMPORTANCE: f64 = 10.0;

pub fn normalize(raw: RawTask) -> Result<Task, ValidationError> {
    let title = normalize_title(raw.title.as_ref())?;

    let estimated_hours = coerce_number(raw.estimated_hours.as_ref())
        .filter(|h| *h >= 0.0)
        .ok_or(ValidationError::InvalidHours)?;

    let importance = coerce_number(raw.importance.as_ref())
        .filter(|i| (0.0..=MAX_IMPORTANCE).contains(i))
        .ok_or(ValidationError::InvalidImportance)?;

    let due_date = normalize_due_date(raw.due_date.as_ref())?;
    let dependencies = normalize_dependencies(raw.dependencies)?;

    Ok(Task {
        title,
        due_date,
        estimated_hours,
        importance,
        dependencies,
    })
}

fn normalize_title(value: Option<&Value>) -> Result<String, ValidationError> {
    let title = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title)
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let n = match value {
        None | Some(Value::Null) => Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok()
            }
        }
        Some(_) => None,
    };
    n.filter(|n| n.is_finite())
}

fn normalize_due_date(value: Option<&Value>) -> Result<Option<NaiveDate>, ValidationError> {
    let text = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s.trim(),
        Some(other) => return Err(ValidationError::InvalidDueDate(other.to_string())),
    };
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDueDate(text.to_string()))
}

fn normalize_dependencies(value: Option<Value>) -> Result<Vec<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(split_dependencies(&s)),
        // Sequences are taken as given: no splitting, no trimming.
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Ok(s),
                _ => Err(ValidationError::InvalidDependencies),
            })
            .collect(),
        Some(_) => Err(ValidationError::InvalidDependencies),
    }
}

/// Split comma separated dependency text, dropping blank segments.
pub fn split_dependencies(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
