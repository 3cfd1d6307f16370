//! Task display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Task;
use crate::output::formatters::{NO_DATE, format_date, truncate_string};

/// Longest title shown in a table cell
const TITLE_WIDTH: usize = 40;

/// Task display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TaskDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "DUE")]
    pub due: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

/// Human label for a completion flag
pub fn status_label(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Pending" }
}

impl From<&Task> for TaskDisplay {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            status: status_label(task.completed).to_string(),
            title: truncate_string(&task.title, TITLE_WIDTH),
            due: task
                .due()
                .map(|d| format_date(Some(d)))
                .unwrap_or_else(|| NO_DATE.to_string()),
            created: format_date(task.timestamp.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_display_from_task() {
        let task = Task {
            id: 3,
            title: "Renew passport".to_string(),
            text: None,
            datetime: Some("2026-11-01T10:00".to_string()),
            completed: true,
            timestamp: None,
        };

        let display = TaskDisplay::from(&task);

        assert_eq!(display.id, 3);
        assert_eq!(display.status, "Completed");
        assert_eq!(display.due, "2026/11/01 10:00:00");
        assert_eq!(display.created, "--");
    }

    #[test]
    fn test_task_display_blank_due() {
        let task = Task {
            id: 1,
            title: "x".to_string(),
            text: None,
            datetime: Some(String::new()),
            completed: false,
            timestamp: Some("2026-01-02 03:04:05".to_string()),
        };

        let display = TaskDisplay::from(&task);
        assert_eq!(display.status, "Pending");
        assert_eq!(display.due, "--");
        assert_eq!(display.created, "2026/01/02 03:04:05");
    }
}
