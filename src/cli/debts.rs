//! Debts command

use colored::Colorize;
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::PortalApi;
use crate::client::models::{Debt, PAYMENT_URL, find_by_id};
use crate::error::{Error, Result};
use crate::models::DebtDisplay;
use crate::output::formatters::format_amount;
use crate::output::print_list;

/// List debts, or print how to pay one with `--pay`
pub async fn run(opts: &GlobalOptions, unpaid: bool, pay: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut debts = ctx.call("Loading debts...", ctx.client.debts()).await?;
    debug!("Fetched {} debts", debts.len());

    if let Some(id) = pay {
        let debt = find_by_id(&debts, id, |d| &d.id)
            .ok_or_else(|| Error::Other(format!("No debt with ID {}", id)))?;
        return print_payment(debt);
    }

    if unpaid {
        debts = Debt::unpaid(debts);
    }

    let rows: Vec<DebtDisplay> = debts.iter().map(DebtDisplay::from).collect();
    print_list(ctx.format, &debts, rows, "You have no pending debts.")
}

fn print_payment(debt: &Debt) -> Result<()> {
    if debt.pagada {
        println!("{} Debt {} is already paid", "✓".green(), debt.id);
        return Ok(());
    }

    println!(
        "Debt {}: {}",
        debt.id.to_string().bold(),
        format_amount(debt.monto)
    );
    println!("Pay online at {}", PAYMENT_URL.cyan());
    Ok(())
}
