//! Class schedules command

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::PortalApi;
use crate::client::models::{Schedule, find_by_id};
use crate::error::{Error, Result};
use crate::models::ScheduleDisplay;
use crate::output::formatters::text_or_dash;
use crate::output::json::format_json;
use crate::output::print_list;

/// List class schedules. This works without signing in.
pub async fn run(opts: &GlobalOptions, room: Option<&str>, show: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut schedules = ctx
        .call("Loading schedules...", ctx.client.schedules())
        .await?;

    if let Some(id) = show {
        let schedule = find_by_id(&schedules, id, |s| &s.id)
            .ok_or_else(|| Error::Other(format!("No schedule with ID {}", id)))?;
        match ctx.format {
            OutputFormat::Json => println!("{}", format_json(schedule)?),
            OutputFormat::Table => print_schedule(schedule),
        }
        return Ok(());
    }

    if let Some(room) = room {
        schedules = filter_by_room(schedules, room);
    }

    let rows: Vec<ScheduleDisplay> = schedules.iter().map(ScheduleDisplay::from).collect();
    print_list(ctx.format, &schedules, rows, "No schedules found.")
}

fn filter_by_room(schedules: Vec<Schedule>, room: &str) -> Vec<Schedule> {
    let room = room.trim().to_lowercase();
    schedules
        .into_iter()
        .filter(|s| {
            s.aula
                .as_deref()
                .is_some_and(|aula| aula.to_lowercase().contains(&room))
        })
        .collect()
}

fn print_schedule(schedule: &Schedule) {
    println!("{}\n", schedule.materia.bold());
    println!("  {:<6} {}", "Time:".dimmed(), text_or_dash(schedule.hora.as_deref()));
    println!("  {:<6} {}", "Room:".dimmed(), text_or_dash(schedule.aula.as_deref()));
    match schedule.ubicacion {
        Some(location) => println!("  {:<6} {}", "Map:".dimmed(), location.map_url().cyan()),
        None => println!("  {:<6} -", "Map:".dimmed()),
    }
}
