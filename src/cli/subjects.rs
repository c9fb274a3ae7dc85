//! Subject offer and preselection commands

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::PortalApi;
use crate::client::models::Subject;
use crate::error::{Error, Result};
use crate::models::SubjectDisplay;
use crate::output::json::format_json;
use crate::output::print_list;
use crate::output::table::format_table_or;

/// Both subject lists, fetched together
#[derive(Debug, Serialize)]
struct Overview<'a> {
    available: &'a [Subject],
    preselected: &'a [Subject],
}

/// Show the offer and the current preselection together
pub async fn overview(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let (available, preselected) = ctx
        .call("Loading subjects...", async {
            let (available, preselected) = futures::join!(
                ctx.client.available_subjects(),
                ctx.client.preselected_subjects()
            );
            Ok::<_, Error>((available?, preselected?))
        })
        .await?;

    match ctx.format {
        OutputFormat::Json => {
            let overview = Overview {
                available: &available,
                preselected: &preselected,
            };
            println!("{}", format_json(&overview)?);
        }
        OutputFormat::Table => {
            let available_rows: Vec<SubjectDisplay> =
                available.iter().map(SubjectDisplay::from).collect();
            let preselected_rows: Vec<SubjectDisplay> =
                preselected.iter().map(SubjectDisplay::from).collect();

            println!("{}", "Available subjects".bold());
            println!(
                "{}\n",
                format_table_or(&available_rows, "No subjects available.")
            );
            println!("{}", "Preselected".bold());
            println!(
                "{}",
                format_table_or(&preselected_rows, "You have not preselected any subject.")
            );
        }
    }
    Ok(())
}

/// List subjects open for preselection
pub async fn available(opts: &GlobalOptions, search: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut subjects = ctx
        .call("Loading subjects...", ctx.client.available_subjects())
        .await?;

    if let Some(query) = search {
        subjects = Subject::search(subjects, query);
    }

    let rows: Vec<SubjectDisplay> = subjects.iter().map(SubjectDisplay::from).collect();
    print_list(ctx.format, &subjects, rows, "No subjects available.")
}

/// List preselected subjects
pub async fn preselected(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let subjects = ctx
        .call("Loading preselection...", ctx.client.preselected_subjects())
        .await?;

    let rows: Vec<SubjectDisplay> = subjects.iter().map(SubjectDisplay::from).collect();
    print_list(
        ctx.format,
        &subjects,
        rows,
        "You have not preselected any subject.",
    )
}

/// Preselect a subject by code
pub async fn preselect(opts: &GlobalOptions, code: &str) -> Result<()> {
    let code = require_code(code)?;
    let ctx = CommandContext::new(opts)?;
    let message = ctx
        .call("Preselecting...", ctx.client.preselect_subject(code))
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        message.unwrap_or_else(|| format!("Subject {} preselected", code))
    );
    Ok(())
}

/// Cancel a preselection by code
pub async fn cancel(opts: &GlobalOptions, code: &str) -> Result<()> {
    let code = require_code(code)?;
    let ctx = CommandContext::new(opts)?;
    let message = ctx
        .call("Cancelling preselection...", ctx.client.cancel_preselection(code))
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        message.unwrap_or_else(|| format!("Preselection of {} cancelled", code))
    );
    Ok(())
}

fn require_code(code: &str) -> Result<&str> {
    let code = code.trim();
    if code.is_empty() {
        return Err(Error::Other("A subject code is required.".to_string()));
    }
    Ok(code)
}
