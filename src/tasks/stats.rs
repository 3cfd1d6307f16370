//! Aggregate counters over a task list

use serde::Serialize;

use crate::client::models::Task;

/// Totals shown next to the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Whole percent of completed tasks, rounded half up; 0 for an empty list
    pub completion_rate: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let completion_rate = if total > 0 {
            (completed * 200 + total) / (total * 2)
        } else {
            0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }

    /// Completion rate as shown to users, e.g. `33%`
    pub fn rate_label(&self) -> String {
        format!("{}%", self.completion_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(flags: &[bool]) -> Vec<Task> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &completed)| Task {
                id: i as i64 + 1,
                title: format!("task {}", i + 1),
                text: None,
                datetime: None,
                completed,
                timestamp: None,
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats, TaskStats::default());
        assert_eq!(stats.rate_label(), "0%");
    }

    #[test]
    fn test_one_of_three_completed() {
        let stats = TaskStats::from_tasks(&tasks(&[true, false, false]));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.rate_label(), "33%");
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(
            TaskStats::from_tasks(&tasks(&[true, true, false])).completion_rate,
            67
        );
        assert_eq!(
            TaskStats::from_tasks(&tasks(&[true, false, false, false, false, false, false, false]))
                .completion_rate,
            13
        );
        assert_eq!(
            TaskStats::from_tasks(&tasks(&[true, true])).completion_rate,
            100
        );
    }
}
