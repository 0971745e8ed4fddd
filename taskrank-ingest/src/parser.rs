//! Bulk JSON parser.
//!
//! Expected payload: a JSON array of task objects, e.g.
//!   [{"title": "Prepare deck", "estimated_hours": 2, "dependencies": ["outline"]}]
//!
//! The batch is all-or-nothing: the first element that fails normalization
//! rejects the whole payload.

use serde_json::Value;
use taskrank_core::{normalize, RawTask, Task, ValidationError};

/// Parse and normalize a bulk payload. Blank input counts as `[]`.
pub fn parse_bulk(raw: &str) -> Result<Vec<Task>, ValidationError> {
    let text = if raw.trim().is_empty() { "[]" } else { raw };

    let parsed: Value = serde_json::from_str(text)
        .map_err(|e| ValidationError::MalformedPayload(e.to_string()))?;

    let Value::Array(items) = parsed else {
        return Err(ValidationError::NotAnArray);
    };
    if items.is_empty() {
        return Err(ValidationError::EmptyArray);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(map) = item else {
                return Err(ValidationError::NotAnObject { index });
            };
            normalize(RawTask::from_map(map)).map_err(|e| ValidationError::InvalidElement {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}
