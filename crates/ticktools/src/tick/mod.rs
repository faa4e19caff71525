pub mod api;
pub mod clients;
pub mod create;
pub mod delete;
pub mod entries;
pub mod projects;
pub mod sheets;
pub mod summary;
pub mod tasks;
pub mod team;
pub mod transport;
pub mod update;

use crate::prelude::{println, *};

/// Tick module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "tick")]
#[command(about = "Tick (tickspot.com) time-tracking operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List time entries with optional project and date filters
    #[clap(name = "entries")]
    Entries(entries::EntriesOptions),

    /// Create a new time entry
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Update an existing time entry
    #[clap(name = "update")]
    Update(update::UpdateOptions),

    /// Delete a time entry
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),

    /// List all projects with budget totals
    #[clap(name = "projects")]
    Projects(projects::ProjectsOptions),

    /// List the tasks of a project
    #[clap(name = "tasks")]
    Tasks(tasks::TasksOptions),

    /// Summarize tracked time for a day, week, or month
    #[clap(name = "summary")]
    Summary(summary::SummaryOptions),

    /// List clients with their project totals
    #[clap(name = "clients")]
    Clients(clients::ClientsOptions),

    /// Show team members and their recent activity
    #[clap(name = "team")]
    Team(team::TeamOptions),

    /// Export time entries as spreadsheet rows
    #[clap(name = "sheets")]
    Sheets(sheets::SheetsOptions),
}

/// Tick configuration from environment variables
#[derive(Debug, Clone)]
pub struct TickConfig {
    pub subdomain: String,
    pub api_token: String,
}

impl TickConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            subdomain: std::env::var("TICK_SUBDOMAIN")
                .map_err(|_| eyre!("TICK_SUBDOMAIN environment variable not set"))?,
            api_token: std::env::var("TICK_API_TOKEN")
                .map_err(|_| eyre!("TICK_API_TOKEN environment variable not set"))?,
        })
    }

    /// Per-deployment API base URL.
    pub fn base_url(&self) -> String {
        format!("https://{}.tickspot.com/api/v2", self.subdomain)
    }
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Tick command...");
    }

    match app.command {
        Commands::Entries(options) => entries::handler(options).await,
        Commands::Create(options) => create::handler(options).await,
        Commands::Update(options) => update::handler(options).await,
        Commands::Delete(options) => delete::handler(options).await,
        Commands::Projects(options) => projects::handler(options).await,
        Commands::Tasks(options) => tasks::handler(options).await,
        Commands::Summary(options) => summary::handler(options).await,
        Commands::Clients(options) => clients::handler(options).await,
        Commands::Team(options) => team::handler(options).await,
        Commands::Sheets(options) => sheets::handler(options).await,
    }
}

// Re-export public data functions for external use (e.g., MCP)
pub use api::TickApi;
pub use clients::list_clients_data;
pub use create::create_time_entry_data;
pub use delete::delete_time_entry_data;
pub use entries::get_time_entries_data;
pub use projects::list_projects_data;
pub use sheets::get_time_entries_for_sheets_data;
pub use summary::get_time_summary_data;
pub use tasks::get_project_tasks_data;
pub use team::get_team_overview_data;
pub use update::update_time_entry_data;
