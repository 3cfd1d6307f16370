//! In-memory HTML page
//!
//! Mirrors the task page's named elements. Rendering writes escaped markup
//! into those elements; [`HtmlPage::to_html`] serializes the page.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

use super::{MessageKind, TaskView};
use crate::client::models::Task;
use crate::models::display::status_label;
use crate::output::formatters::format_date;
use crate::tasks::{TaskAction, TaskStats};

/// Navigation shown to logged-out users
pub const AUTH_LINKS: &str = "auth-links";
/// Navigation shown to logged-in users
pub const USER_LINKS: &str = "user-links";
pub const TASKS_CONTAINER: &str = "tasks-container";
pub const TOTAL_TASKS: &str = "total-tasks";
pub const COMPLETED_TASKS: &str = "completed-tasks";
pub const PENDING_TASKS: &str = "pending-tasks";
pub const COMPLETION_RATE: &str = "completion-rate";
/// Add-task modal; its element is also the backdrop
pub const ADD_TASK_MODAL: &str = "add-task-modal";

const EMPTY_PLACEHOLDER: &str = r#"<div class="no-tasks">No tasks yet</div>"#;

/// Escape text for inclusion in element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for one task block
pub fn render_task(task: &Task) -> String {
    let state = if task.completed { "completed" } else { "pending" };
    let mut html = String::new();

    let _ = writeln!(
        html,
        r#"<div class="task-item{}" data-task-id="{}">"#,
        if task.completed { " completed" } else { "" },
        task.id
    );
    html.push_str(r#"  <div class="task-header">"#);
    html.push('\n');
    let _ = writeln!(
        html,
        r#"    <h4 class="task-title">{}</h4>"#,
        escape_html(&task.title)
    );
    let _ = writeln!(
        html,
        r#"    <div class="task-status"><span class="status-badge {}">{}</span></div>"#,
        state,
        status_label(task.completed)
    );
    html.push_str("  </div>\n");

    html.push_str(r#"  <div class="task-meta">"#);
    let _ = write!(
        html,
        "<span>Created: {}</span>",
        escape_html(&format_date(task.timestamp.as_deref()))
    );
    if let Some(due) = task.due() {
        let _ = write!(
            html,
            "<span>Due: {}</span>",
            escape_html(&format_date(Some(due)))
        );
    }
    html.push_str("</div>\n");

    if let Some(body) = task.body() {
        let _ = writeln!(
            html,
            r#"  <div class="task-text">{}</div>"#,
            escape_html(body)
        );
    }

    html.push_str(r#"  <div class="task-actions">"#);
    html.push('\n');
    for action in TaskAction::for_task(task) {
        let _ = writeln!(html, "    {}", render_button(&action));
    }
    html.push_str("  </div>\n</div>\n");

    html
}

fn render_button(action: &TaskAction) -> String {
    let style = match action {
        TaskAction::Toggle {
            completed: true, ..
        } => "btn-success",
        TaskAction::Toggle {
            completed: false, ..
        } => "btn-secondary",
        TaskAction::Edit { .. } => "btn-warning",
        TaskAction::Delete { .. } => "btn-danger",
    };
    let extra = match action {
        TaskAction::Toggle { completed, .. } => format!(r#" data-completed="{}""#, completed),
        _ => String::new(),
    };

    format!(
        r#"<button class="btn btn-sm {}" data-action="{}" data-task-id="{}"{}>{}</button>"#,
        style,
        action.name(),
        action.task_id(),
        extra,
        action.label()
    )
}

/// Markup for the whole task container
pub fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    tasks.iter().map(render_task).collect()
}

/// A named element on the page
#[derive(Debug, Clone, PartialEq)]
struct Element {
    visible: bool,
    /// Markup content; text set via `set_text` is stored escaped
    inner_html: String,
}

impl Element {
    fn new(visible: bool) -> Self {
        Self {
            visible,
            inner_html: String::new(),
        }
    }
}

/// A message that disappears once `expires_at` has passed
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub kind: MessageKind,
    /// `None` when the timeout reaches past what `Instant` can represent;
    /// such a message never expires.
    pub expires_at: Option<Instant>,
}

/// In-memory page
#[derive(Debug)]
pub struct HtmlPage {
    elements: BTreeMap<String, Element>,
    messages: Vec<TransientMessage>,
    message_timeout: Duration,
    confirm_reply: bool,
    prompts: Vec<String>,
}

impl HtmlPage {
    /// A page with no elements at all
    pub fn empty() -> Self {
        Self {
            elements: BTreeMap::new(),
            messages: Vec::new(),
            message_timeout: Duration::from_secs(3),
            confirm_reply: false,
            prompts: Vec::new(),
        }
    }

    /// The task page: navigation, task container, counters and a closed modal
    pub fn tasks_page() -> Self {
        let mut page = Self::empty();
        for (id, visible) in [
            (AUTH_LINKS, true),
            (USER_LINKS, false),
            (TASKS_CONTAINER, true),
            (TOTAL_TASKS, true),
            (COMPLETED_TASKS, true),
            (PENDING_TASKS, true),
            (COMPLETION_RATE, true),
            (ADD_TASK_MODAL, false),
        ] {
            page.elements.insert(id.to_string(), Element::new(visible));
        }
        page
    }

    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    /// Answer every confirmation prompt with `reply`
    pub fn with_confirm_reply(mut self, reply: bool) -> Self {
        self.confirm_reply = reply;
        self
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Set an element's visibility. Returns `false` if the page lacks it.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.visible = visible;
                true
            }
            None => false,
        }
    }

    fn set_inner_html(&mut self, id: &str, html: String) {
        match self.elements.get_mut(id) {
            Some(el) => el.inner_html = html,
            None => log::debug!("Page has no element #{}", id),
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.set_inner_html(id, escape_html(text));
    }

    /// Remove messages whose display time has passed
    pub fn prune_messages(&mut self, now: Instant) {
        self.messages
            .retain(|m| m.expires_at.is_none_or(|expires| expires > now));
    }

    /// Serialize the page body
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for (id, el) in &self.elements {
            let style = if el.visible { "" } else { r#" style="display: none""# };
            let _ = writeln!(html, r#"<div id="{}"{}>"#, id, style);
            if !el.inner_html.is_empty() {
                html.push_str(&el.inner_html);
                if !el.inner_html.ends_with('\n') {
                    html.push('\n');
                }
            }
            html.push_str("</div>\n");
        }
        for msg in &self.messages {
            let _ = writeln!(
                html,
                r#"<div class="message {}">{}</div>"#,
                msg.kind.as_str(),
                escape_html(&msg.text)
            );
        }
        html
    }
}

/// Inspection helpers for tests
#[cfg(test)]
impl HtmlPage {
    /// Visibility of an element, `None` if the page lacks it
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.visible)
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner_html.as_str())
    }

    /// Messages currently on the page
    pub fn messages(&self) -> &[TransientMessage] {
        &self.messages
    }

    /// Confirmation prompts asked so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl TaskView for HtmlPage {
    fn toggle_navigation(&mut self, logged_in: bool) {
        if self.has_element(AUTH_LINKS) && self.has_element(USER_LINKS) {
            self.set_visible(AUTH_LINKS, !logged_in);
            self.set_visible(USER_LINKS, logged_in);
        }
    }

    fn render_tasks(&mut self, tasks: &[Task]) {
        self.set_inner_html(TASKS_CONTAINER, render_task_list(tasks));
    }

    fn render_stats(&mut self, stats: &TaskStats) {
        self.set_text(TOTAL_TASKS, &stats.total.to_string());
        self.set_text(COMPLETED_TASKS, &stats.completed.to_string());
        self.set_text(PENDING_TASKS, &stats.pending.to_string());
        self.set_text(COMPLETION_RATE, &stats.rate_label());
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.messages.push(TransientMessage {
            text: text.to_string(),
            kind,
            expires_at: Instant::now().checked_add(self.message_timeout),
        });
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_reply
    }

    fn set_modal_open(&mut self, open: bool) {
        self.set_visible(ADD_TASK_MODAL, open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            text: None,
            datetime: None,
            completed,
            timestamp: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_script_title_renders_inert() {
        let mut t = task(1, "<script>alert(1)</script>", false);
        t.text = Some("<img src=x onerror=alert(2)>".to_string());

        let html = render_task(&t);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;img src=x onerror=alert(2)&gt;"));
    }

    #[test]
    fn test_empty_list_placeholder() {
        assert_eq!(render_task_list(&[]), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_task_block_contents() {
        let mut t = task(7, "Pay rent", true);
        t.datetime = Some("2026-11-01T09:00".to_string());
        t.text = Some("before noon".to_string());

        let html = render_task(&t);

        assert!(html.contains(r#"class="task-item completed" data-task-id="7""#));
        assert!(html.contains(r#"<span class="status-badge completed">Completed</span>"#));
        assert!(html.contains("Created: --"));
        assert!(html.contains("Due: 2026/11/01 09:00:00"));
        assert!(html.contains(r#"<div class="task-text">before noon</div>"#));
        assert!(html.contains(r#"data-action="toggle" data-task-id="7" data-completed="false""#));
        assert!(html.contains(r#"data-action="edit" data-task-id="7""#));
        assert!(html.contains(r#"data-action="delete" data-task-id="7""#));
    }

    #[test]
    fn test_blank_body_and_due_are_omitted() {
        let mut t = task(2, "Quick", false);
        t.text = Some(String::new());
        t.datetime = Some(String::new());

        let html = render_task(&t);

        assert!(!html.contains("task-text"));
        assert!(!html.contains("Due:"));
        assert!(html.contains(r#"data-completed="true""#));
    }

    #[test]
    fn test_render_preserves_order() {
        let html = render_task_list(&[task(2, "second", false), task(1, "first", false)]);
        let second = html.find("second").unwrap();
        let first = html.find("first").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_render_stats_writes_counters() {
        let mut page = HtmlPage::tasks_page();
        page.render_stats(&TaskStats {
            total: 3,
            completed: 1,
            pending: 2,
            completion_rate: 33,
        });

        assert_eq!(page.inner_html(TOTAL_TASKS), Some("3"));
        assert_eq!(page.inner_html(COMPLETED_TASKS), Some("1"));
        assert_eq!(page.inner_html(PENDING_TASKS), Some("2"));
        assert_eq!(page.inner_html(COMPLETION_RATE), Some("33%"));
    }

    #[test]
    fn test_messages_expire() {
        let mut page = HtmlPage::tasks_page().with_message_timeout(Duration::from_secs(3));
        page.show_message("Task added", MessageKind::Success);
        assert_eq!(page.messages().len(), 1);

        page.prune_messages(Instant::now());
        assert_eq!(page.messages().len(), 1);

        page.prune_messages(Instant::now() + Duration::from_secs(4));
        assert!(page.messages().is_empty());
    }

    #[test]
    fn test_oversized_timeout_keeps_message() {
        let mut page =
            HtmlPage::tasks_page().with_message_timeout(Duration::from_secs(u64::MAX));
        page.show_message("Task added", MessageKind::Success);

        assert_eq!(page.messages().len(), 1);
        assert!(page.messages()[0].expires_at.is_none());

        page.prune_messages(Instant::now() + Duration::from_secs(3600));
        assert_eq!(page.messages().len(), 1);
    }

    #[test]
    fn test_modal_visibility() {
        let mut page = HtmlPage::tasks_page();
        assert_eq!(page.is_visible(ADD_TASK_MODAL), Some(false));

        page.set_modal_open(true);
        assert_eq!(page.is_visible(ADD_TASK_MODAL), Some(true));
    }

    #[test]
    fn test_to_html_hides_invisible_elements() {
        let mut page = HtmlPage::tasks_page();
        page.render_tasks(&[task(1, "a & b", false)]);
        page.show_message("<b>hi</b>", MessageKind::Error);

        let html = page.to_html();
        assert!(html.contains(r#"<div id="add-task-modal" style="display: none">"#));
        assert!(html.contains(r#"<div id="tasks-container">"#));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains(r#"<div class="message error">&lt;b&gt;hi&lt;/b&gt;</div>"#));
    }
}
