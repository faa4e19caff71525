use colored::Colorize;
use serde::{Deserialize, Serialize};
use ticktools_core::tick::{
    parse_date, period_range, transform_period_summary, Period, PeriodSummaryOutput,
};

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for the period summary
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # This week:
  ticktools tick summary

  # The week containing a given date:
  ticktools tick summary --period week --start-date 2024-03-01

  # A whole month:
  ticktools tick summary --period month --start-date 2024-12-15")]
pub struct SummaryOptions {
    /// Period type: day, week, or month
    #[arg(long, default_value = "week")]
    pub period: String,

    /// Anchor date in YYYY-MM-DD format (defaults to today)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Public data function - used by both CLI and MCP
///
/// Resolves the period keyword to a concrete date range, fetches every entry
/// in the window, and aggregates by project (ranked) and by date.
pub async fn get_time_summary_data<T: Transport>(
    api: &TickApi<T>,
    period: String,
    start_date: Option<String>,
) -> Result<PeriodSummaryOutput, ToolError> {
    let period: Period = period.parse()?;
    let anchor = match &start_date {
        Some(date) => parse_date(date)?,
        None => chrono::Local::now().date_naive(),
    };
    let range = period_range(period, anchor);

    let entries = api
        .get_all_time_entries(
            None,
            Some(&range.start_string()),
            Some(&range.end_string()),
        )
        .await?;

    Ok(transform_period_summary(period, range, &entries))
}

/// Handle the summary command
pub async fn handler(options: SummaryOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = get_time_summary_data(&api, options.period, options.start_date).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    std::println!(
        "\n{} {} ({})\n",
        "Summary:".bold(),
        output.period.cyan(),
        output.date_range.bright_black()
    );

    let mut table = new_table();
    table.add_row(prettytable::row!["Project".bold(), "Hours".bold()]);
    for (project, hours) in output.hours_by_project.iter() {
        table.add_row(prettytable::row![project, format!("{hours:.2}")]);
    }
    table.printstd();

    std::println!();
    let mut table = new_table();
    table.add_row(prettytable::row!["Date".bold(), "Hours".bold()]);
    for (date, hours) in output.hours_by_date.iter() {
        table.add_row(prettytable::row![date, format!("{hours:.2}")]);
    }
    table.printstd();

    std::println!(
        "\n{}: {:.2}  {}: {}  {}: {:.2}\n",
        "Total hours".bold(),
        output.total_hours,
        "Entries".bold(),
        output.total_entries,
        "Average per day".bold(),
        output.average_hours_per_day
    );

    Ok(())
}
