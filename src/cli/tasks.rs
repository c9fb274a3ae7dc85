//! Tasks command

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::PortalApi;
use crate::client::models::Task;
use crate::error::Result;
use crate::models::TaskDisplay;
use crate::output::print_list;

/// List assignments, optionally only the pending ones
pub async fn run(opts: &GlobalOptions, pending: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut tasks = ctx.call("Loading tasks...", ctx.client.tasks()).await?;
    debug!("Fetched {} tasks", tasks.len());

    if pending {
        tasks = Task::pending(tasks);
    }

    let rows: Vec<TaskDisplay> = tasks.iter().map(TaskDisplay::from).collect();
    let empty = if pending {
        "No pending tasks."
    } else {
        "No tasks assigned."
    };
    print_list(ctx.format, &tasks, rows, empty)
}
