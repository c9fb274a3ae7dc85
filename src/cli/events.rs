//! Events command

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::PortalApi;
use crate::client::models::{Event, find_by_id};
use crate::error::{Error, Result};
use crate::models::EventDisplay;
use crate::output::formatters::{format_datetime, text_or_dash};
use crate::output::json::format_json;
use crate::output::print_list;

/// List events, or show one in full with `--show`
pub async fn run(opts: &GlobalOptions, show: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let events = ctx.call("Loading events...", ctx.client.events()).await?;

    if let Some(id) = show {
        let event = find_by_id(&events, id, |e| &e.id)
            .ok_or_else(|| Error::Other(format!("No event with ID {}", id)))?;
        match ctx.format {
            OutputFormat::Json => println!("{}", format_json(event)?),
            OutputFormat::Table => print_event(event),
        }
        return Ok(());
    }

    let rows: Vec<EventDisplay> = events.iter().map(EventDisplay::from).collect();
    print_list(ctx.format, &events, rows, "No events available at the moment.")
}

fn print_event(event: &Event) {
    println!("{}\n", event.titulo.bold());
    println!(
        "  {:<8} {}",
        "When:".dimmed(),
        event
            .fecha_evento
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  {:<8} {}", "Where:".dimmed(), text_or_dash(event.lugar.as_deref()));
    if let Some(ref coordinates) = event.coordenadas {
        println!("  {:<8} {}", "Coords:".dimmed(), coordinates);
    }
    if let Some(location) = event.location() {
        println!("  {:<8} {}", "Map:".dimmed(), location.map_url().cyan());
    }
    if let Some(ref description) = event.descripcion {
        println!("\n{}", description);
    }
}
