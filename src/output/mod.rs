//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod progress;
pub mod table;

/// Print a list as a table or as JSON.
///
/// `rows` feed the table; `data` is what JSON output serializes. `empty` is
/// printed instead of a table when there are no rows.
pub fn print_list<T, R>(format: OutputFormat, data: &[T], rows: Vec<R>, empty: &str) -> Result<()>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => println!("{}", table::format_table_or(&rows, empty)),
        OutputFormat::Json => println!("{}", json::format_json(data)?),
    }
    Ok(())
}
