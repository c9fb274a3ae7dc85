//! News command

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::PortalApi;
use crate::error::Result;
use crate::models::NewsDisplay;
use crate::output::print_list;

/// List the latest news
pub async fn run(opts: &GlobalOptions, limit: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut news = ctx.call("Loading news...", ctx.client.news()).await?;
    debug!("Fetched {} news items", news.len());

    if let Some(limit) = limit {
        news.truncate(limit);
    }

    let rows: Vec<NewsDisplay> = news.iter().map(NewsDisplay::from).collect();
    print_list(ctx.format, &news, rows, "No news published.")
}
