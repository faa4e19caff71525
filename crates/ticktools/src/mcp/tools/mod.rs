mod tick;

use serde::{Deserialize, Serialize};

use crate::tick::transport::HttpTransport;
use crate::tick::TickApi;

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "ticktools".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "get_time_entries".to_string(),
            description: "Get Tick time entries with optional filters. Returns the full entry list plus totals and hours grouped by user. Requires TICK_API_TOKEN and TICK_SUBDOMAIN environment variables.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "project": {
                        "type": "string",
                        "description": "Project name (optional, partial match, case insensitive)"
                    },
                    "start_date": {
                        "type": "string",
                        "description": "Start date in YYYY-MM-DD format (optional)"
                    },
                    "end_date": {
                        "type": "string",
                        "description": "End date in YYYY-MM-DD format (optional)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "create_time_entry".to_string(),
            description: "Create a new Tick time entry. Project and task are resolved by partial, case-insensitive name match; hours may be decimal (e.g. 2.5).".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "project": {
                        "type": "string",
                        "description": "Project name (partial match, case insensitive)"
                    },
                    "task": {
                        "type": "string",
                        "description": "Task name (partial match, case insensitive)"
                    },
                    "hours": {
                        "type": "number",
                        "description": "Number of hours (can be decimal, e.g., 2.5)"
                    },
                    "date": {
                        "type": "string",
                        "description": "Date in YYYY-MM-DD format"
                    },
                    "notes": {
                        "type": "string",
                        "description": "Optional notes for the time entry"
                    }
                },
                "required": ["project", "task", "hours", "date"]
            }),
        },
        Tool {
            name: "update_time_entry".to_string(),
            description: "Update an existing Tick time entry. At least one of hours or notes must be provided; omitted fields are left untouched.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "entry_id": {
                        "type": "number",
                        "description": "ID of the time entry to update"
                    },
                    "hours": {
                        "type": "number",
                        "description": "New number of hours (optional)"
                    },
                    "notes": {
                        "type": "string",
                        "description": "New notes (optional)"
                    }
                },
                "required": ["entry_id"]
            }),
        },
        Tool {
            name: "delete_time_entry".to_string(),
            description: "Delete a Tick time entry by id.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "entry_id": {
                        "type": "number",
                        "description": "ID of the time entry to delete"
                    }
                },
                "required": ["entry_id"]
            }),
        },
        Tool {
            name: "list_projects".to_string(),
            description: "Get all Tick projects with budget, hours used, remaining budget, client, and owner per project, plus account-wide totals.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_project_tasks".to_string(),
            description: "Get all tasks for a specific Tick project, resolved by partial, case-insensitive project name.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "project": {
                        "type": "string",
                        "description": "Project name (partial match, case insensitive)"
                    }
                },
                "required": ["project"]
            }),
        },
        Tool {
            name: "get_time_summary_by_period".to_string(),
            description: "Get a time tracking summary for a day, week, or month: totals, average hours per day, hours by project (ranked descending), and hours by date.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "period": {
                        "type": "string",
                        "description": "Period type: day, week, or month (default: week)",
                        "enum": ["day", "week", "month"]
                    },
                    "start_date": {
                        "type": "string",
                        "description": "Anchor date in YYYY-MM-DD format (optional, defaults to the current period)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "list_clients".to_string(),
            description: "Get all Tick clients with their project counts, budgets, and hours, built by grouping projects per client.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_team_overview".to_string(),
            description: "Get an overview of team members and their activity over the last 7 days, including per-user hours and entry counts.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_time_entries_for_sheets".to_string(),
            description: "Get Tick time entries formatted for Google Sheets import: a header row (Date, Project, Task, User, Hours, Notes, Client) followed by one row per entry.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "project": {
                        "type": "string",
                        "description": "Project name (optional, partial match, case insensitive)"
                    },
                    "start_date": {
                        "type": "string",
                        "description": "Start date in YYYY-MM-DD format (optional)"
                    },
                    "end_date": {
                        "type": "string",
                        "description": "End date in YYYY-MM-DD format (optional)"
                    },
                    "format_for_sheets": {
                        "type": "boolean",
                        "description": "Whether to format data for sheets (default: true); false returns the plain listing"
                    }
                },
                "required": []
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    api: &TickApi<HttpTransport>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        "get_time_entries" => tick::handle_get_time_entries(params.arguments, api, global).await,
        "create_time_entry" => tick::handle_create_time_entry(params.arguments, api, global).await,
        "update_time_entry" => tick::handle_update_time_entry(params.arguments, api, global).await,
        "delete_time_entry" => tick::handle_delete_time_entry(params.arguments, api, global).await,
        "list_projects" => tick::handle_list_projects(api, global).await,
        "get_project_tasks" => tick::handle_get_project_tasks(params.arguments, api, global).await,
        "get_time_summary_by_period" => {
            tick::handle_get_time_summary(params.arguments, api, global).await
        }
        "list_clients" => tick::handle_list_clients(api, global).await,
        "get_team_overview" => tick::handle_get_team_overview(api, global).await,
        "get_time_entries_for_sheets" => {
            tick::handle_get_time_entries_for_sheets(params.arguments, api, global).await
        }
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}
