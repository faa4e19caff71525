use serde::{Deserialize, Serialize};
use ticktools_core::tick::{transform_sheets, SheetsOutput};

use super::api::TickApi;
use super::entries::get_time_entries_data;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for the spreadsheet export
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # Whole month as spreadsheet rows:
  ticktools tick sheets --start-date 2024-03-01 --end-date 2024-03-31

  # Tab-separated, ready to paste:
  ticktools tick sheets --project acme --tsv")]
pub struct SheetsOptions {
    /// Project name (partial match, case insensitive)
    #[arg(long)]
    pub project: Option<String>,

    /// Start date in YYYY-MM-DD format
    #[arg(long)]
    pub start_date: Option<String>,

    /// End date in YYYY-MM-DD format
    #[arg(long)]
    pub end_date: Option<String>,

    /// Print tab-separated rows instead of JSON
    #[arg(long)]
    pub tsv: bool,
}

/// Public data function - used by both CLI and MCP
///
/// Same listing as `get_time_entries`, flattened to a header row plus one
/// row per entry for spreadsheet import.
pub async fn get_time_entries_for_sheets_data<T: Transport>(
    api: &TickApi<T>,
    project: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<SheetsOutput, ToolError> {
    let listing = get_time_entries_data(api, project, start_date, end_date).await?;
    Ok(transform_sheets(&listing))
}

/// Handle the sheets command
pub async fn handler(options: SheetsOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = get_time_entries_for_sheets_data(
        &api,
        options.project,
        options.start_date,
        options.end_date,
    )
    .await?;

    if options.tsv {
        for row in &output.sheet_data {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            std::println!("{}", cells.join("\t"));
        }
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
