//! Student request commands

use colored::Colorize;
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::PortalApi;
use crate::client::models::{NewRequest, REQUEST_TYPES, RequestType};
use crate::error::{Error, Result};
use crate::models::{RequestDisplay, RequestTypeDisplay};
use crate::output::print_list;

/// List requests filed by the student
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let requests = ctx
        .call("Loading requests...", ctx.client.my_requests())
        .await?;
    debug!("Fetched {} requests", requests.len());

    let rows: Vec<RequestDisplay> = requests.iter().map(RequestDisplay::from).collect();
    print_list(ctx.format, &requests, rows, "You have not filed any request.")
}

/// List the request types that can be filed. Offline.
pub fn types(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let rows: Vec<RequestTypeDisplay> = REQUEST_TYPES.iter().map(Into::into).collect();
    print_list(ctx.format, &REQUEST_TYPES, rows, "No request types.")
}

/// File a new request
pub async fn create(opts: &GlobalOptions, kind: &str, description: &str) -> Result<()> {
    let request = validate(kind, description)?;
    let ctx = CommandContext::new(opts)?;

    let message = ctx
        .call("Filing request...", ctx.client.create_request(&request))
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        message.unwrap_or_else(|| format!(
            "{} filed",
            RequestType::describe(&request.tipo)
        ))
    );
    Ok(())
}

/// Cancel a filed request
pub async fn cancel(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let message = ctx
        .call("Cancelling request...", ctx.client.cancel_request(id))
        .await?;

    println!(
        "{} {}",
        "✓".green(),
        message.unwrap_or_else(|| format!("Request {} cancelled", id))
    );
    Ok(())
}

/// Check the type and description before anything is sent
fn validate(kind: &str, description: &str) -> Result<NewRequest> {
    let kind = RequestType::find(kind.trim()).ok_or_else(|| {
        let codes: Vec<&str> = REQUEST_TYPES.iter().map(|t| t.code).collect();
        Error::Other(format!(
            "Unknown request type '{}'. Valid types: {}",
            kind.trim(),
            codes.join(", ")
        ))
    })?;

    let description = description.trim();
    if description.is_empty() {
        return Err(Error::Other(
            "Please describe what the request is for.".to_string(),
        ));
    }

    Ok(NewRequest {
        tipo: kind.code.to_string(),
        descripcion: description.to_string(),
    })
}
