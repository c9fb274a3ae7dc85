//! Password reset request

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::PortalApi;
use crate::error::{Error, Result};

/// Ask the portal to send a reset link. Both fields are required.
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(u) => u,
        None => {
            let mut input = Input::<String>::with_theme(&theme)
                .with_prompt("Username")
                .allow_empty(true);
            if let Some(last) = ctx.config.last_username.clone() {
                input = input.default(last);
            }
            input.interact_text()?
        }
    };
    let email = match email {
        Some(e) => e,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };

    let (username, email) = (username.trim(), email.trim());
    if username.is_empty() || email.is_empty() {
        return Err(Error::Other(
            "Please enter both your username and email.".to_string(),
        ));
    }

    let message = ctx
        .call(
            "Sending reset request...",
            ctx.client.reset_password(username, email),
        )
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        message.unwrap_or_else(|| "Check your email for the reset link.".to_string())
    );
    Ok(())
}
