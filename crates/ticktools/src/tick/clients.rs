use colored::Colorize;
use serde::{Deserialize, Serialize};
use ticktools_core::tick::{transform_clients, ClientsOutput};

use super::api::TickApi;
use super::transport::Transport;
use crate::prelude::{println, *};

/// Options for listing clients
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ClientsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Public data function - used by both CLI and MCP
///
/// Tick has no client → project endpoint, so the relation is built locally
/// by grouping the full project list on `client.id`.
pub async fn list_clients_data<T: Transport>(api: &TickApi<T>) -> Result<ClientsOutput, ToolError> {
    let clients = api.get_clients().await?;
    let projects = api.get_all_projects().await?;
    Ok(transform_clients(&clients, &projects))
}

/// Handle the clients command
pub async fn handler(options: ClientsOptions) -> Result<()> {
    let api = TickApi::from_env()?;
    let output = list_clients_data(&api).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold(),
        "Name".bold(),
        "Projects".bold(),
        "Budget".bold(),
        "Hours".bold()
    ]);
    for client in &output.clients {
        table.add_row(prettytable::row![
            client.id,
            client.name,
            client.project_count,
            format!("{:.1}", client.total_budget),
            format!("{:.1}", client.total_hours_logged)
        ]);
    }
    table.printstd();

    std::println!("\n{}: {}\n", "Clients".bold(), output.total_clients);

    Ok(())
}
