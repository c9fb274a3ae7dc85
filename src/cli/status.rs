//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::API_BASE_URL;
use crate::error::Result;

/// Show whether a session is stored and which config is in use. Offline.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    println!("{}\n", "UASD Portal Status".bold());
    println!(
        "Config file: {}",
        ctx.config_path.display().to_string().cyan()
    );

    if ctx.session.is_authenticated()? {
        if opts.token_ref().is_some() {
            println!("{} Signed in (token from --token)", "✓".green());
        } else {
            println!("{} Signed in", "✓".green());
        }
    } else {
        println!("{} Not signed in", "✗".red());
        println!("  → Run '{}' to sign in", "uasd login".cyan());
    }

    if let Some(ref username) = ctx.config.last_username {
        println!("{} Last username: {}", "○".dimmed(), username);
    }

    let base_url = ctx.config.api_base_url(opts.api_host_ref());
    if base_url != API_BASE_URL {
        println!("{} Custom API host: {}", "○".dimmed(), base_url.cyan());
    }

    println!();
    Ok(())
}
