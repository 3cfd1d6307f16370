//! Login, registration and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AuthApi;
use crate::client::models::{Credentials, Registration};
use crate::error::{Error, Result};
use crate::validate;

fn prompt_text(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn prompt_password(value: Option<String>, confirm: bool) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Log in and store the returned token and user id.
///
/// A host given by flag or environment is saved to the config file.
pub async fn login(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = prompt_text(username, "Username")?;
    let password = prompt_password(password, false)?;
    validate::check_credentials(&username, &password)?;

    let response = ctx
        .client
        .login(&Credentials {
            username: username.clone(),
            password,
        })
        .await?;

    let token = match response.token.as_deref() {
        Some(token) if response.envelope.is_success() && !token.is_empty() => token,
        _ => {
            return Err(Error::Other(
                response
                    .envelope
                    .message
                    .unwrap_or_else(|| "Login failed".to_string()),
            ));
        }
    };

    ctx.session()
        .store_login(token, response.user.as_ref().map(|u| u.id))?;
    log::info!("Session stored at {}", ctx.session_path.display());

    // The token is only good against the host that issued it
    if let Some(host) = opts.api_host_ref()
        && ctx.config.api_host.as_deref() != Some(host)
    {
        let mut config = ctx.config.clone();
        config.api_host = Some(host.to_string());
        config.save_to(ctx.config_path.clone())?;
        log::info!("Remembered API host {}", host);
    }

    println!("{} Logged in as {}", "✓".green(), username.bold());
    Ok(())
}

/// Create an account. Does not log in.
pub async fn register(
    opts: &GlobalOptions,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = prompt_text(username, "Username")?;
    let email = prompt_text(email, "Email")?;
    let password = prompt_password(password, true)?;
    validate::check_registration(&username, &email, &password)?;

    let envelope = ctx
        .client
        .register(&Registration {
            username: username.clone(),
            password,
            email,
        })
        .await?;

    if !envelope.is_success() {
        return Err(Error::Other(
            envelope
                .message
                .unwrap_or_else(|| "Registration failed".to_string()),
        ));
    }

    println!(
        "{} Registered {}. Run {} to sign in.",
        "✓".green(),
        username.bold(),
        "taskop login".cyan()
    );
    Ok(())
}

/// Log out. Always succeeds locally, even when the server is unreachable.
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client.logout().await;
    Ok(())
}
