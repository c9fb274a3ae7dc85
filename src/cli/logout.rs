//! Logout command

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;

/// Forget the saved session. No request is sent; logging out twice is fine.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let was_signed_in = ctx.session.is_authenticated()?;

    ctx.store.clear()?;

    if was_signed_in {
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} You were not signed in", "○".dimmed());
    }
    Ok(())
}
