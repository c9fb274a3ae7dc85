//! Profile command

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::PortalApi;
use crate::client::models::UserInfo;
use crate::error::Result;
use crate::output::formatters::NOT_AVAILABLE;
use crate::output::json::format_json;

/// Show the signed-in student's profile
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let info = ctx
        .call("Loading profile...", ctx.client.user_info())
        .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&info)?),
        OutputFormat::Table => print_profile(&info),
    }
    Ok(())
}

fn print_profile(info: &UserInfo) {
    let or_na = |v: Option<&str>| v.unwrap_or(NOT_AVAILABLE).to_string();

    println!("{}\n", "Student Profile".bold());
    println!("  {:<10} {}", "Name:".dimmed(), or_na(info.full_name().as_deref()));
    println!("  {:<10} {}", "Username:".dimmed(), or_na(info.username.as_deref()));
    println!("  {:<10} {}", "Email:".dimmed(), or_na(info.email.as_deref()));
}
