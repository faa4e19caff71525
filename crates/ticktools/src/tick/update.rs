use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ticktools_core::tick::build_update_body;

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for updating a time entry
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # Change the hours on an entry:
  ticktools tick update 12345 --hours 3

  # Change only the notes (hours stay untouched):
  ticktools tick update 12345 --notes \"pairing session\"")]
pub struct UpdateOptions {
    /// ID of the time entry to update
    pub entry_id: u64,

    /// New number of hours
    #[arg(long)]
    pub hours: Option<f64>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Response shape for a successful update.
#[derive(Debug, Serialize)]
pub struct UpdateOutput {
    pub success: bool,
    pub message: String,
    pub entry: Value,
}

/// Public data function - used by both CLI and MCP
///
/// Fails with `NoFieldsToUpdate` before any network call when neither field
/// is supplied; otherwise a single PUT.
pub async fn update_time_entry_data<T: Transport>(
    api: &TickApi<T>,
    entry_id: u64,
    hours: Option<f64>,
    notes: Option<String>,
) -> Result<UpdateOutput, ToolError> {
    let body = build_update_body(hours, notes.as_deref())?;
    let entry = api.update_time_entry(entry_id, &body).await?;

    Ok(UpdateOutput {
        success: true,
        message: format!("Updated time entry {entry_id}"),
        entry,
    })
}

/// Handle the update command
pub async fn handler(options: UpdateOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output =
        update_time_entry_data(&api, options.entry_id, options.hours, options.notes).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        std::println!("{} {}", "✓".green().bold(), output.message);
    }

    Ok(())
}
