//! Videos command

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::PortalApi;
use crate::error::Result;
use crate::models::VideoDisplay;
use crate::output::print_list;

/// List university videos with their watch links
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let videos = ctx.call("Loading videos...", ctx.client.videos()).await?;

    let rows: Vec<VideoDisplay> = videos.iter().map(VideoDisplay::from).collect();
    print_list(ctx.format, &videos, rows, "No videos available.")
}
