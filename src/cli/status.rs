//! Status command implementation

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::json::format_json;
use crate::session::TokenClaims;

/// Machine-readable status for `--format json`
#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: String,
    session_file: String,
    api_host: String,
    logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.session();
    let claims = session.token().as_deref().and_then(TokenClaims::decode);

    match ctx.format {
        OutputFormat::Json => {
            let report = StatusReport {
                config_file: ctx.config_path.display().to_string(),
                session_file: ctx.session_path.display().to_string(),
                api_host: ctx.client.base_url().to_string(),
                logged_in: session.token().is_some(),
                user_id: session.user_id(),
                username: claims.as_ref().and_then(|c| c.username.clone()),
                expires_at: claims.as_ref().and_then(TokenClaims::expires_at),
            };
            println!("{}", format_json(&report)?);
            return Ok(());
        }
        OutputFormat::Html => {
            let mut view = ctx.view();
            session.check_login_status(view.as_view());
            view.finish();
            return Ok(());
        }
        OutputFormat::Pretty | OutputFormat::Table => {}
    }

    println!("{}\n", "taskop Status".bold());
    println!("Config file: {}", ctx.config_path.display().to_string().cyan());
    println!("Session file: {}", ctx.session_path.display().to_string().cyan());
    println!("API host: {}", ctx.client.base_url().cyan());
    println!();

    let mut view = ctx.view();
    let logged_in = session.check_login_status(view.as_view());
    view.finish();

    if !logged_in {
        println!("{} Not logged in", "✗".red());
        println!("  → Run 'taskop login' to sign in");
        return Ok(());
    }

    match session.user_id() {
        Some(id) => println!("{} Logged in (user id {})", "✓".green(), id),
        None => println!("{} Logged in", "✓".green()),
    }

    let Some(claims) = claims else {
        println!("{} Token payload not readable", "○".dimmed());
        return Ok(());
    };

    if let Some(ref username) = claims.username {
        println!("{} Username: {}", "✓".green(), username);
    }

    let now = Utc::now();
    match claims.expires_at() {
        Some(_) if claims.is_expired(now) => {
            println!(
                "{} Token expired (the next request will sign you out)",
                "⚠".yellow()
            );
        }
        Some(expires) => {
            let remaining = expires.signed_duration_since(now);
            println!(
                "{} Token valid (expires in {}h {}m)",
                "✓".green(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        None => println!("{} Token has no expiry", "○".dimmed()),
    }

    Ok(())
}
