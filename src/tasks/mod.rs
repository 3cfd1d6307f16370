//! Task view controller
//!
//! Loads the task list through the API and pushes it into a [`TaskView`].
//! The controller holds no task state of its own: every mutation is one
//! request followed by a full reload, and the view always shows whatever the
//! last successful fetch returned.

mod action;
mod stats;

pub use action::TaskAction;
pub use stats::TaskStats;

use crate::client::TasksApi;
use crate::client::models::{Envelope, NewTask, Task, TaskPatch};
use crate::error::Result;
use crate::view::html::ADD_TASK_MODAL;
use crate::view::{MessageKind, TaskView};

pub const DELETE_PROMPT: &str = "Delete this task?";

/// Result of a task mutation, after the view has been told about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the change and the list was reloaded
    Done,
    /// Nothing was sent: the user declined, or the action is not supported
    Skipped,
    /// The request failed or was rejected
    Failed,
}

/// The add-task form's three fields, as entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub text: String,
    pub datetime: String,
}

impl From<&TaskForm> for NewTask {
    fn from(form: &TaskForm) -> Self {
        NewTask {
            title: form.title.clone(),
            text: form.text.clone(),
            datetime: form.datetime.clone(),
        }
    }
}

/// Replace the view's task list
pub fn display_tasks(view: &mut dyn TaskView, tasks: &[Task]) {
    view.render_tasks(tasks);
}

/// Compute and render the counters for `tasks`
pub fn update_task_stats(view: &mut dyn TaskView, tasks: &[Task]) -> TaskStats {
    let stats = TaskStats::from_tasks(tasks);
    view.render_stats(&stats);
    stats
}

pub fn show_add_task_modal(view: &mut dyn TaskView) {
    view.set_modal_open(true);
}

pub fn close_modal(view: &mut dyn TaskView) {
    view.set_modal_open(false);
}

/// Page-level click: a click on the modal backdrop itself closes it.
#[allow(dead_code)]
pub fn handle_page_click(view: &mut dyn TaskView, target: &str) {
    if target == ADD_TASK_MODAL {
        close_modal(view);
    }
}

/// Drives a [`TaskView`] from a [`TasksApi`].
pub struct TaskController<'a, A: TasksApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: TasksApi + ?Sized> TaskController<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Fetch the current task list.
    ///
    /// `Ok(None)` means the server answered without a success status.
    pub async fn fetch_tasks(&self) -> Result<Option<Vec<Task>>> {
        let response = self.api.profile().await?;
        if !response.envelope.is_success() {
            log::warn!(
                "Profile request rejected: {}",
                response.envelope.message.as_deref().unwrap_or("no message")
            );
            return Ok(None);
        }
        Ok(Some(response.tasks.unwrap_or_default()))
    }

    /// Fetch and render the task list and counters.
    ///
    /// On failure the view keeps its previous content and shows an error.
    pub async fn load_user_tasks(&self, view: &mut dyn TaskView) -> Option<Vec<Task>> {
        match self.fetch_tasks().await {
            Ok(Some(tasks)) => {
                log::debug!("Loaded {} tasks", tasks.len());
                display_tasks(view, &tasks);
                update_task_stats(view, &tasks);
                Some(tasks)
            }
            Ok(None) => {
                view.show_message("Failed to load tasks", MessageKind::Error);
                None
            }
            Err(e) => {
                log::error!("Failed to load tasks: {}", e);
                view.show_message("Failed to load tasks", MessageKind::Error);
                None
            }
        }
    }

    /// Create a task. On success closes the form and reloads the list.
    pub async fn add_new_task(&self, view: &mut dyn TaskView, task: NewTask) -> Outcome {
        let response = self.api.create_task(&task).await;
        if !Self::report(view, response, "Task added", "Failed to add task") {
            return Outcome::Failed;
        }
        close_modal(view);
        self.load_user_tasks(view).await;
        Outcome::Done
    }

    /// Set a task's completion flag, then reload.
    pub async fn toggle_task(&self, view: &mut dyn TaskView, id: i64, completed: bool) -> Outcome {
        let response = self
            .api
            .update_task(id, &TaskPatch::completion(completed))
            .await;
        if !Self::report(view, response, "Task status updated", "Failed to update task") {
            return Outcome::Failed;
        }
        self.load_user_tasks(view).await;
        Outcome::Done
    }

    /// Delete a task after confirmation, then reload. Declining sends nothing.
    pub async fn delete_task(&self, view: &mut dyn TaskView, id: i64) -> Outcome {
        if !view.confirm(DELETE_PROMPT) {
            log::debug!("Delete of task {} declined", id);
            return Outcome::Skipped;
        }

        let response = self.api.delete_task(id).await;
        if !Self::report(view, response, "Task deleted", "Failed to delete task") {
            return Outcome::Failed;
        }
        self.load_user_tasks(view).await;
        Outcome::Done
    }

    // TODO: wire to PATCH /api/tasks/{id} once the service documents which
    // fields besides `completed` it accepts.
    pub fn edit_task(&self, view: &mut dyn TaskView, id: i64) {
        log::debug!("Edit requested for task {}", id);
        view.show_message("Editing tasks is not supported yet", MessageKind::Info);
    }

    /// Run one of a task block's actions
    pub async fn perform(&self, view: &mut dyn TaskView, action: TaskAction) -> Outcome {
        match action {
            TaskAction::Toggle { id, completed } => self.toggle_task(view, id, completed).await,
            TaskAction::Edit { id } => {
                self.edit_task(view, id);
                Outcome::Skipped
            }
            TaskAction::Delete { id } => self.delete_task(view, id).await,
        }
    }

    /// Form submit: read the three fields and create the task.
    pub async fn submit_add_task_form(&self, view: &mut dyn TaskView, form: &TaskForm) -> Outcome {
        self.add_new_task(view, NewTask::from(form)).await
    }

    /// Turn a mutation response into a transient message. Returns success.
    fn report(
        view: &mut dyn TaskView,
        response: Result<Envelope>,
        success: &str,
        failure: &str,
    ) -> bool {
        match response {
            Ok(envelope) if envelope.is_success() => {
                view.show_message(success, MessageKind::Success);
                true
            }
            Ok(envelope) => {
                let text = match envelope.message.as_deref() {
                    Some(reason) if !reason.is_empty() => format!("{}: {}", failure, reason),
                    _ => failure.to_string(),
                };
                view.show_message(&text, MessageKind::Error);
                false
            }
            Err(e) => {
                log::error!("{}: {}", failure, e);
                view.show_message(failure, MessageKind::Error);
                false
            }
        }
    }
}
