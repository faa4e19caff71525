use colored::Colorize;
use serde::{Deserialize, Serialize};
use ticktools_core::tick::{transform_projects, ProjectsOutput};

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for listing projects
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ProjectsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Public data function - used by both CLI and MCP
pub async fn list_projects_data<T: Transport>(
    api: &TickApi<T>,
) -> Result<ProjectsOutput, ToolError> {
    let projects = api.get_all_projects().await?;
    Ok(transform_projects(&projects))
}

/// Handle the projects command
pub async fn handler(options: ProjectsOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = list_projects_data(&api).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold(),
        "Name".bold(),
        "Client".bold(),
        "Budget".bold(),
        "Used".bold(),
        "Remaining".bold(),
        "Owner".bold(),
        "Closed".bold()
    ]);
    for project in &output.projects {
        let remaining = format!("{:.1}", project.budget_remaining);
        let remaining = if project.budget_remaining < 0.0 {
            remaining.red().to_string()
        } else {
            remaining.green().to_string()
        };
        table.add_row(prettytable::row![
            project.id,
            project.name,
            project.client,
            format!("{:.1}", project.budget),
            format!("{:.1}", project.hours_used),
            remaining,
            project.owner,
            if project.is_closed { "yes" } else { "" }
        ]);
    }
    table.printstd();

    std::println!(
        "\n{}: {}  {}: {:.1}  {}: {:.1}\n",
        "Projects".bold(),
        output.total_projects,
        "Total budget".bold(),
        output.total_budget,
        "Hours logged".bold(),
        output.total_hours_logged
    );

    Ok(())
}
