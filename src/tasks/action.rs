//! Per-task actions offered next to every rendered task

use crate::client::models::Task;

/// An action a user can trigger on one task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Set the completion flag to `completed`
    Toggle { id: i64, completed: bool },
    Edit { id: i64 },
    Delete { id: i64 },
}

impl TaskAction {
    /// The three actions attached to a task block, in display order.
    ///
    /// The toggle always flips the task's current completion state.
    pub fn for_task(task: &Task) -> [TaskAction; 3] {
        [
            TaskAction::Toggle {
                id: task.id,
                completed: !task.completed,
            },
            TaskAction::Edit { id: task.id },
            TaskAction::Delete { id: task.id },
        ]
    }

    pub fn task_id(&self) -> i64 {
        match *self {
            TaskAction::Toggle { id, .. } | TaskAction::Edit { id } | TaskAction::Delete { id } => {
                id
            }
        }
    }

    /// Machine name used in rendered markup
    pub fn name(&self) -> &'static str {
        match self {
            TaskAction::Toggle { .. } => "toggle",
            TaskAction::Edit { .. } => "edit",
            TaskAction::Delete { .. } => "delete",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            TaskAction::Toggle {
                completed: true, ..
            } => "Mark completed",
            TaskAction::Toggle {
                completed: false, ..
            } => "Mark pending",
            TaskAction::Edit { .. } => "Edit",
            TaskAction::Delete { .. } => "Delete",
        }
    }
}
