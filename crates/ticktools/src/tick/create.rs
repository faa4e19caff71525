use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ticktools_core::tick::parse_date;

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for creating a time entry
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # Log 2.5 hours of design work:
  ticktools tick create --project acme --task design --hours 2.5 --date 2024-03-01

  # With a note:
  ticktools tick create --project acme --task design --hours 1 --date 2024-03-01 --notes \"sprint review\"")]
pub struct CreateOptions {
    /// Project name (partial match, case insensitive)
    #[arg(long)]
    pub project: String,

    /// Task name (partial match, case insensitive)
    #[arg(long)]
    pub task: String,

    /// Number of hours (can be decimal, e.g., 2.5)
    #[arg(long)]
    pub hours: f64,

    /// Date in YYYY-MM-DD format
    #[arg(long)]
    pub date: String,

    /// Optional notes for the time entry
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Response shape for a successful create.
#[derive(Debug, Serialize)]
pub struct CreateOutput {
    pub success: bool,
    pub message: String,
    pub entry: Value,
}

/// Public data function - used by both CLI and MCP
///
/// Resolves project and task names, then issues a single POST. No retry on
/// failure.
pub async fn create_time_entry_data<T: Transport>(
    api: &TickApi<T>,
    project: String,
    task: String,
    hours: f64,
    date: String,
    notes: String,
) -> Result<CreateOutput, ToolError> {
    parse_date(&date)?;

    let resolved = api.find_project(&project).await?;
    let task_id = api.find_task(resolved.id, &project, &task).await?;

    let entry = api
        .create_time_entry(resolved.id, task_id, hours, &date, &notes)
        .await?;

    Ok(CreateOutput {
        success: true,
        message: format!("Created {hours} hour entry for {project} - {task}"),
        entry,
    })
}

/// Handle the create command
pub async fn handler(options: CreateOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = create_time_entry_data(
        &api,
        options.project,
        options.task,
        options.hours,
        options.date,
        options.notes,
    )
    .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        std::println!("{} {}", "✓".green().bold(), output.message);
    }

    Ok(())
}
