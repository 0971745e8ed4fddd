//! Task model for the analysis pipeline.
//!
//! `RawTask` is whatever the user typed or pasted; `Task` is the validated
//! form that can enter the draft queue. The only way to get a `Task` is
//! through [`crate::normalize`].

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

/// Validated work item, ready to be sent for scoring.
///
/// Serializes to the wire shape the scoring service expects
/// (`due_date` as `YYYY-MM-DD` or `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub(crate) title: String,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) estimated_hours: f64,
    pub(crate) importance: f64,
    pub(crate) dependencies: Vec<String>,
}

impl Task {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    pub fn importance(&self) -> f64 {
        self.importance
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Unvalidated input record.
///
/// Fields stay loosely typed (`serde_json::Value`) because the two intake
/// paths disagree: the manual form hands over text for everything, bulk
/// JSON hands over numbers and arrays. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTask {
    pub title: Option<Value>,
    pub due_date: Option<Value>,
    pub estimated_hours: Option<Value>,
    pub importance: Option<Value>,
    pub dependencies: Option<Value>,
}

impl RawTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            ..Self::default()
        }
    }

    /// Build from the manual entry form, where every field is text and
    /// dependencies are comma separated.
    pub fn from_form(
        title: &str,
        due_date: &str,
        estimated_hours: &str,
        importance: &str,
        dependencies: &str,
    ) -> Self {
        let text = |s: &str| Some(Value::String(s.to_string()));
        Self {
            title: text(title),
            due_date: text(due_date),
            estimated_hours: text(estimated_hours),
            importance: text(importance),
            dependencies: text(dependencies),
        }
    }

    /// Take the known keys out of a JSON object.
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        Self {
            title: map.remove("title"),
            due_date: map.remove("due_date"),
            estimated_hours: map.remove("estimated_hours"),
            importance: map.remove("importance"),
            dependencies: map.remove("dependencies"),
        }
    }

    pub fn with_due_date(mut self, due_date: impl Into<Value>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_hours(mut self, hours: impl Into<Value>) -> Self {
        self.estimated_hours = Some(hours.into());
        self
    }

    pub fn with_importance(mut self, importance: impl Into<Value>) -> Self {
        self.importance = Some(importance.into());
        self
    }

    pub fn with_dependencies(mut self, dependencies: impl Into<Value>) -> Self {
        self.dependencies = Some(dependencies.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_map_ignores_unknown_keys() {
        let Value::Object(map) = json!({"title": "Ship", "importance": 4, "owner": "me"}) else {
            unreachable!()
        };
        let raw = RawTask::from_map(map);
        assert_eq!(raw.title, Some(json!("Ship")));
        assert_eq!(raw.importance, Some(json!(4)));
        assert!(raw.estimated_hours.is_none());
    }

    #[test]
    fn task_serializes_to_wire_shape() {
        let task = Task {
            title: "Write report".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            estimated_hours: 2.0,
            importance: 7.0,
            dependencies: vec!["research".to_string()],
        };
        let v = serde_json::to_value(&task).unwrap();
        assert_eq!(
            v,
            json!({
                "title": "Write report",
                "due_date": "2026-03-01",
                "estimated_hours": 2.0,
                "importance": 7.0,
                "dependencies": ["research"],
            })
        );
    }

    #[test]
    fn unset_due_date_serializes_as_null() {
        let task = Task {
            title: "x".to_string(),
            due_date: None,
            estimated_hours: 0.0,
            importance: 0.0,
            dependencies: vec![],
        };
        let v = serde_json::to_value(&task).unwrap();
        assert_eq!(v["due_date"], Value::Null);
        assert_eq!(v["dependencies"], json!([]));
    }
}
