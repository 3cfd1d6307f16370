//! Terminal render target

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use serde::Serialize;

use super::{MessageKind, TaskView};
use crate::cli::OutputFormat;
use crate::client::models::Task;
use crate::models::TaskDisplay;
use crate::output::formatters::format_date;
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::session::Navigator;
use crate::tasks::TaskStats;

/// JSON document printed by [`TerminalView::finish`]
#[derive(Debug, Default, Serialize)]
struct TaskListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<TaskStats>,
}

/// Renders to stdout, messages to stderr.
///
/// In JSON mode tasks and stats are buffered and printed as one document.
pub struct TerminalView {
    format: OutputFormat,
    assume_yes: bool,
    listing: TaskListing,
}

impl TerminalView {
    pub fn new(format: OutputFormat, assume_yes: bool) -> Self {
        Self {
            format,
            assume_yes,
            listing: TaskListing::default(),
        }
    }

    fn print_pretty(tasks: &[Task]) {
        if tasks.is_empty() {
            println!("{}", "No tasks yet.".dimmed());
            return;
        }

        for task in tasks {
            let marker = if task.completed {
                "✓".green()
            } else {
                "○".yellow()
            };
            let title = if task.completed {
                task.title.dimmed()
            } else {
                task.title.bold()
            };
            println!("{} {} {}", marker, format!("#{}", task.id).cyan(), title);

            if let Some(body) = task.body() {
                println!("    {}", body);
            }

            let mut meta = format!("Created: {}", format_date(task.timestamp.as_deref()));
            if let Some(due) = task.due() {
                meta.push_str(&format!("  Due: {}", format_date(Some(due))));
            }
            println!("    {}", meta.dimmed());
        }
    }
}

impl TaskView for TerminalView {
    fn toggle_navigation(&mut self, logged_in: bool) {
        if logged_in || !matches!(self.format, OutputFormat::Pretty) {
            return;
        }
        println!("{} login, register", "Commands:".dimmed());
    }

    fn render_tasks(&mut self, tasks: &[Task]) {
        match self.format {
            OutputFormat::Json => self.listing.tasks = Some(tasks.to_vec()),
            OutputFormat::Table => {
                let rows: Vec<TaskDisplay> = tasks.iter().map(TaskDisplay::from).collect();
                println!("{}", format_table(&rows));
            }
            OutputFormat::Pretty | OutputFormat::Html => Self::print_pretty(tasks),
        }
    }

    fn render_stats(&mut self, stats: &TaskStats) {
        match self.format {
            OutputFormat::Json => self.listing.stats = Some(*stats),
            _ => {
                println!();
                println!(
                    "{} total · {} completed · {} pending · {} done",
                    stats.total.to_string().bold(),
                    stats.completed.to_string().green(),
                    stats.pending.to_string().yellow(),
                    stats.rate_label().bold()
                );
            }
        }
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        match kind {
            MessageKind::Success => eprintln!("{} {}", "✓".green(), text),
            MessageKind::Error => eprintln!("{} {}", "✗".red(), text.red()),
            MessageKind::Info => eprintln!("{} {}", "○".dimmed(), text),
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }

    fn set_modal_open(&mut self, open: bool) {
        log::debug!("Add-task form {}", if open { "opened" } else { "closed" });
    }

    fn finish(&mut self) {
        if self.listing.tasks.is_none() && self.listing.stats.is_none() {
            return;
        }

        let listing = std::mem::take(&mut self.listing);
        match format_json(&listing) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize task listing: {}", e),
        }
    }
}

/// A terminal has no page to load; leaving the session tells the user instead.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, location: &str) {
        log::debug!("Navigating to {}", location);
        eprintln!(
            "{} Signed out. Run {} to sign in again.",
            "○".dimmed(),
            "taskop login".cyan()
        );
    }
}
