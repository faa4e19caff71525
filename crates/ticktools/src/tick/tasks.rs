use colored::Colorize;
use serde::{Deserialize, Serialize};
use ticktools_core::tick::{transform_tasks, TasksOutput};

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for listing a project's tasks
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct TasksOptions {
    /// Project name (partial match, case insensitive)
    pub project: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Public data function - used by both CLI and MCP
pub async fn get_project_tasks_data<T: Transport>(
    api: &TickApi<T>,
    project: String,
) -> Result<TasksOutput, ToolError> {
    let resolved = api.find_project(&project).await?;
    let tasks = api.get_tasks(resolved.id).await?;
    Ok(transform_tasks(project, resolved.id, &tasks))
}

/// Handle the tasks command
pub async fn handler(options: TasksOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = get_project_tasks_data(&api, options.project).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    std::println!(
        "\n{} (project id {})\n",
        output.project.bold().cyan(),
        output.project_id
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold(),
        "Name".bold(),
        "Budget".bold(),
        "Used".bold(),
        "Closed".bold()
    ]);
    for task in &output.tasks {
        table.add_row(prettytable::row![
            task.id,
            task.name,
            format!("{:.1}", task.budget),
            format!("{:.1}", task.hours_used),
            if task.is_closed { "yes" } else { "" }
        ]);
    }
    table.printstd();

    std::println!("\n{}: {}\n", "Tasks".bold(), output.total_tasks);

    Ok(())
}
