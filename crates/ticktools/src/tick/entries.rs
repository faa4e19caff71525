use colored::Colorize;
use serde::{Deserialize, Serialize};
use ticktools_core::tick::{parse_date, transform_time_entries, TimeEntriesOutput};

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for listing time entries
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # All entries, all projects:
  ticktools tick entries

  # Entries for a project (partial, case-insensitive name):
  ticktools tick entries --project acme

  # Entries within a date window:
  ticktools tick entries --start-date 2024-03-01 --end-date 2024-03-31")]
pub struct EntriesOptions {
    /// Project name (partial match, case insensitive)
    #[arg(long)]
    pub project: Option<String>,

    /// Start date in YYYY-MM-DD format
    #[arg(long)]
    pub start_date: Option<String>,

    /// End date in YYYY-MM-DD format
    #[arg(long)]
    pub end_date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Public data function - used by both CLI and MCP
///
/// Validates dates, resolves the optional project name, paginates the
/// matching time-entries endpoint to completion, and aggregates the result.
pub async fn get_time_entries_data<T: Transport>(
    api: &TickApi<T>,
    project: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<TimeEntriesOutput, ToolError> {
    if let Some(start) = &start_date {
        parse_date(start)?;
    }
    if let Some(end) = &end_date {
        parse_date(end)?;
    }

    let project_id = match &project {
        Some(name) => Some(api.find_project(name).await?.id),
        None => None,
    };

    let entries = api
        .get_all_time_entries(project_id, start_date.as_deref(), end_date.as_deref())
        .await?;

    Ok(transform_time_entries(
        project,
        project_id,
        start_date.as_deref(),
        end_date.as_deref(),
        entries,
    ))
}

/// Handle the entries command
pub async fn handler(options: EntriesOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output =
        get_time_entries_data(&api, options.project, options.start_date, options.end_date).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    std::println!(
        "\n{} ({})\n",
        output.project.bold().cyan(),
        output.date_range.bright_black()
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Date".bold(),
        "Project".bold(),
        "Task".bold(),
        "User".bold(),
        "Hours".bold(),
        "Notes".bold()
    ]);
    for entry in &output.entries {
        table.add_row(prettytable::row![
            entry.date(),
            entry.project_name(),
            entry.task_name(),
            entry.user_full_name(),
            format!("{:.2}", entry.hours()),
            entry.notes()
        ]);
    }
    table.printstd();

    std::println!(
        "\n{}: {}  {}: {}\n",
        "Entries".bold(),
        output.total_entries,
        "Total hours".bold(),
        format!("{:.2}", output.total_hours).green()
    );

    Ok(())
}
