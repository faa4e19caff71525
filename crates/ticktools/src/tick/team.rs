use chrono::{Duration, Local};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use ticktools_core::tick::{transform_team, DateRange, TeamOutput};

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for the team overview
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct TeamOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Public data function - used by both CLI and MCP
///
/// Users enriched with their last-7-days activity. "Active" is strictly
/// "recent hours > 0".
pub async fn get_team_overview_data<T: Transport>(
    api: &TickApi<T>,
) -> Result<TeamOutput, ToolError> {
    let users = api.get_users().await?;

    let today = Local::now().date_naive();
    let window = DateRange {
        start: today - Duration::days(7),
        end: today,
    };
    let recent_entries = api
        .get_all_time_entries(
            None,
            Some(&window.start_string()),
            Some(&window.end_string()),
        )
        .await?;

    Ok(transform_team(&users, &recent_entries))
}

/// Handle the team command
pub async fn handler(options: TeamOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = get_team_overview_data(&api).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Name".bold(),
        "Email".bold(),
        "Hours (7d)".bold(),
        "Entries (7d)".bold(),
        "Timezone".bold(),
        "Active".bold()
    ]);
    for member in &output.users {
        table.add_row(prettytable::row![
            member.name,
            member.email,
            format!("{:.1}", member.recent_hours_7_days),
            member.recent_entries_7_days,
            member.timezone,
            if member.is_active {
                "yes".green().to_string()
            } else {
                String::new()
            }
        ]);
    }
    table.printstd();

    std::println!(
        "\n{}: {}  {}: {}  {}: {:.1}  {}: {:.2}\n",
        "Users".bold(),
        output.total_users,
        "Active (7d)".bold(),
        output.active_users_last_7_days,
        "Hours (7d)".bold(),
        output.total_hours_last_7_days,
        "Average per active user".bold(),
        output.average_hours_per_active_user
    );

    Ok(())
}
