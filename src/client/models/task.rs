//! Task models

use serde::{Deserialize, Serialize};

/// A task as owned by the server.
///
/// The profile endpoint reports the due date as `due_date` and the creation
/// time as `created_at`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    /// Free-text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Due date/time
    #[serde(default, alias = "due_date", skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    #[serde(default)]
    pub completed: bool,

    /// Creation time
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Task {
    /// Body text, `None` when absent or blank
    pub fn body(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Due date, `None` when absent or blank
    pub fn due(&self) -> Option<&str> {
        self.datetime.as_deref().filter(|d| !d.is_empty())
    }
}

/// Payload for `POST /api/tasks`: the add-task form fields as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub text: String,
    pub datetime: String,
}

/// Payload for `PATCH /api/tasks/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
        }
    }
}
