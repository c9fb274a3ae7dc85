//! Login command

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::PortalApi;
use crate::error::{Error, Result};

/// Run the login command.
///
/// Missing username or password are prompted for. Both must be non-empty
/// before anything is sent.
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
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

    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    let username = username.trim().to_string();
    if username.is_empty() || password.is_empty() {
        return Err(Error::Other(
            "Please enter both your username and password.".to_string(),
        ));
    }

    let token = ctx
        .call("Signing in...", ctx.client.login(&username, &password))
        .await?;
    ctx.store.save(&token)?;
    debug!("Session token saved");

    if opts.token_ref().is_none() {
        ctx.config.last_username = Some(username.clone());
        ctx.save_config()?;
    }

    println!("{} Signed in as {}", "✓".green(), username.bold());
    Ok(())
}
