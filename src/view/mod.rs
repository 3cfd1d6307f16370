//! Render targets for the task view
//!
//! [`TaskView`] is everything the task controller and session utility need
//! from the host page. [`HtmlPage`] renders into an in-memory HTML page,
//! [`TerminalView`] renders to the terminal.

pub mod html;
pub mod terminal;

pub use html::HtmlPage;
pub use terminal::{TerminalNavigator, TerminalView};

use crate::client::models::Task;
use crate::tasks::TaskStats;

/// Kind of a transient user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    /// CSS class / machine name
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Info => "info",
        }
    }
}

/// Host render target.
pub trait TaskView {
    /// Show the logged-in (`true`) or logged-out navigation. Targets without
    /// navigation regions do nothing.
    fn toggle_navigation(&mut self, logged_in: bool);

    /// Replace the task list with `tasks`
    fn render_tasks(&mut self, tasks: &[Task]);

    fn render_stats(&mut self, stats: &TaskStats);

    /// Show a transient message
    fn show_message(&mut self, text: &str, kind: MessageKind);

    /// Ask the user a yes/no question
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Open or close the add-task modal
    fn set_modal_open(&mut self, open: bool);

    /// Flush buffered output. Called once when a command is done rendering.
    fn finish(&mut self) {}
}
