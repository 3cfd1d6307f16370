//! Task commands: list, add, done, undo, edit, delete
//!
//! Each command runs one controller operation against the render target
//! picked by `--format`, then flushes it. A failed operation has already been
//! reported on the view; the returned error only sets the exit status.

use crate::cli::context::CommandView;
use crate::cli::{CommandContext, GlobalOptions};
use crate::client::TaskClient;
use crate::error::{Error, Result};
use crate::tasks::{self, Outcome, TaskAction, TaskController, TaskForm};

fn check(outcome: Outcome, what: &str) -> Result<()> {
    match outcome {
        Outcome::Done | Outcome::Skipped => Ok(()),
        Outcome::Failed => Err(Error::Other(what.to_string())),
    }
}

/// Load the context and render target, requiring a stored session
fn start(opts: &GlobalOptions) -> Result<(CommandContext, CommandView)> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;

    let mut view = ctx.view();
    ctx.session().check_login_status(view.as_view());
    Ok((ctx, view))
}

fn controller(ctx: &CommandContext) -> TaskController<'_, TaskClient> {
    TaskController::new(&ctx.client)
}

/// List tasks and counters
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let (ctx, mut view) = start(opts)?;
    let loaded = controller(&ctx).load_user_tasks(view.as_view()).await;
    view.finish();

    match loaded {
        Some(_) => Ok(()),
        None => Err(Error::Other("could not load tasks".to_string())),
    }
}

/// Create a task from the add-task fields
pub async fn add(opts: &GlobalOptions, title: String, text: String, due: String) -> Result<()> {
    let (ctx, mut view) = start(opts)?;
    let form = TaskForm {
        title,
        text,
        datetime: due,
    };

    tasks::show_add_task_modal(view.as_view());
    let outcome = controller(&ctx)
        .submit_add_task_form(view.as_view(), &form)
        .await;
    view.finish();

    check(outcome, "task was not added")
}

/// Mark a task completed (`completed = true`) or pending again
pub async fn set_completed(opts: &GlobalOptions, id: i64, completed: bool) -> Result<()> {
    let (ctx, mut view) = start(opts)?;
    let outcome = controller(&ctx)
        .perform(view.as_view(), TaskAction::Toggle { id, completed })
        .await;
    view.finish();

    check(outcome, &format!("task {} was not updated", id))
}

pub async fn edit(opts: &GlobalOptions, id: i64) -> Result<()> {
    let (ctx, mut view) = start(opts)?;
    let outcome = controller(&ctx)
        .perform(view.as_view(), TaskAction::Edit { id })
        .await;
    view.finish();

    check(outcome, "task was not edited")
}

/// Delete a task after confirmation. Declining is not an error.
pub async fn delete(opts: &GlobalOptions, id: i64) -> Result<()> {
    let (ctx, mut view) = start(opts)?;
    let outcome = controller(&ctx)
        .perform(view.as_view(), TaskAction::Delete { id })
        .await;
    view.finish();

    check(outcome, &format!("task {} was not deleted", id))
}
