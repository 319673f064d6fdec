//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// One to-do entry.
///
/// `completed` stays unset until the entry is first toggled, so freshly
/// added entries persist as `{"label": ...}` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            completed: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}
