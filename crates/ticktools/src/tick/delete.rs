use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for deleting a time entry
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct DeleteOptions {
    /// ID of the time entry to delete
    pub entry_id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Response shape for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub success: bool,
    pub message: String,
}

/// Public data function - used by both CLI and MCP
///
/// Single DELETE; success is inferred from the absence of a transport error.
pub async fn delete_time_entry_data<T: Transport>(
    api: &TickApi<T>,
    entry_id: u64,
) -> Result<DeleteOutput, ToolError> {
    api.delete_time_entry(entry_id).await?;

    Ok(DeleteOutput {
        success: true,
        message: format!("Deleted time entry {entry_id}"),
    })
}

/// Handle the delete command
pub async fn handler(options: DeleteOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = delete_time_entry_data(&api, options.entry_id).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        std::println!("{} {}", "✓".green().bold(), output.message);
    }

    Ok(())
}
