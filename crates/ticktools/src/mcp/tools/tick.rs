//! MCP handlers for the Tick tools
//!
//! Tool failures (validation, not-found, transport) are returned as
//! structured error values in the tool content with `isError` set, never as
//! JSON-RPC protocol errors: the calling agent needs to read the
//! `available_projects` / `available_tasks` suggestion sets and retry with a
//! corrected name.

use crate::prelude::{eprintln, *};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{CallToolResult, Content, JsonRpcError};
use crate::tick;
use crate::tick::transport::Transport;
use crate::tick::TickApi;

fn invalid_arguments(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError {
        code: -32602,
        message: format!("Invalid arguments: {e}"),
        data: None,
    }
}

fn internal_error(message: String) -> JsonRpcError {
    JsonRpcError {
        code: -32603,
        message,
        data: None,
    }
}

/// Wrap a successful data-function output in an MCP tool result.
fn tool_result<T: Serialize>(output: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(output)
        .map_err(|e| internal_error(format!("Serialization error: {e}")))?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| internal_error(format!("Internal error: {e}")))
}

/// Turn a tool failure into a structured error value.
fn tool_error(err: ToolError, verb: &str) -> Result<serde_json::Value, JsonRpcError> {
    let payload = match &err {
        ToolError::ProjectNotFound { available, .. } => json!({
            "error": err.to_string(),
            "available_projects": available,
        }),
        ToolError::TaskNotFound { available, .. } => json!({
            "error": err.to_string(),
            "available_tasks": available,
        }),
        ToolError::InvalidDate(_) | ToolError::InvalidPeriod(_) | ToolError::NoFieldsToUpdate(_) => {
            json!({"error": err.to_string()})
        }
        ToolError::Transport(cause) => json!({
            "error": format!("Failed to {verb}: {cause}"),
        }),
    };

    let json_string = serde_json::to_string_pretty(&payload)
        .map_err(|e| internal_error(format!("Serialization error: {e}")))?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: Some(true),
    };

    serde_json::to_value(result).map_err(|e| internal_error(format!("Internal error: {e}")))
}

pub async fn handle_get_time_entries<T: Transport>(
    arguments: Option<serde_json::Value>,
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        project: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    }

    let args: Args = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!(
            "Calling get_time_entries: project={:?}, start_date={:?}, end_date={:?}",
            args.project, args.start_date, args.end_date
        );
    }

    match tick::get_time_entries_data(api, args.project, args.start_date, args.end_date).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "fetch time entries"),
    }
}

pub async fn handle_create_time_entry<T: Transport>(
    arguments: Option<serde_json::Value>,
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        project: String,
        task: String,
        hours: f64,
        date: String,
        #[serde(default)]
        notes: String,
    }

    let args: Args = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!(
            "Calling create_time_entry: project={}, task={}, hours={}, date={}",
            args.project, args.task, args.hours, args.date
        );
    }

    match tick::create_time_entry_data(
        api,
        args.project,
        args.task,
        args.hours,
        args.date,
        args.notes,
    )
    .await
    {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "create time entry"),
    }
}

pub async fn handle_update_time_entry<T: Transport>(
    arguments: Option<serde_json::Value>,
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        entry_id: u64,
        hours: Option<f64>,
        notes: Option<String>,
    }

    let args: Args = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!(
            "Calling update_time_entry: entry_id={}, hours={:?}, notes={:?}",
            args.entry_id, args.hours, args.notes
        );
    }

    match tick::update_time_entry_data(api, args.entry_id, args.hours, args.notes).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "update time entry"),
    }
}

pub async fn handle_delete_time_entry<T: Transport>(
    arguments: Option<serde_json::Value>,
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        entry_id: u64,
    }

    let args: Args = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!("Calling delete_time_entry: entry_id={}", args.entry_id);
    }

    match tick::delete_time_entry_data(api, args.entry_id).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "delete time entry"),
    }
}

pub async fn handle_list_projects<T: Transport>(
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling list_projects");
    }

    match tick::list_projects_data(api).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "fetch projects"),
    }
}

pub async fn handle_get_project_tasks<T: Transport>(
    arguments: Option<serde_json::Value>,
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        project: String,
    }

    let args: Args = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!("Calling get_project_tasks: project={}", args.project);
    }

    match tick::get_project_tasks_data(api, args.project).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "fetch project tasks"),
    }
}

pub async fn handle_get_time_summary<T: Transport>(
    arguments: Option<serde_json::Value>,
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        #[serde(default = "default_period")]
        period: String,
        start_date: Option<String>,
    }

    fn default_period() -> String {
        "week".to_string()
    }

    let args: Args = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!(
            "Calling get_time_summary_by_period: period={}, start_date={:?}",
            args.period, args.start_date
        );
    }

    match tick::get_time_summary_data(api, args.period, args.start_date).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "get time summary"),
    }
}

pub async fn handle_list_clients<T: Transport>(
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling list_clients");
    }

    match tick::list_clients_data(api).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "fetch clients"),
    }
}

pub async fn handle_get_team_overview<T: Transport>(
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling get_team_overview");
    }

    match tick::get_team_overview_data(api).await {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "fetch team overview"),
    }
}

pub async fn handle_get_time_entries_for_sheets<T: Transport>(
    arguments: Option<serde_json::Value>,
    api: &TickApi<T>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct Args {
        project: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        #[serde(default = "default_true")]
        format_for_sheets: bool,
    }

    fn default_true() -> bool {
        true
    }

    let args: Args = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(invalid_arguments)?;

    if global.verbose {
        eprintln!(
            "Calling get_time_entries_for_sheets: project={:?}, start_date={:?}, end_date={:?}, format_for_sheets={}",
            args.project, args.start_date, args.end_date, args.format_for_sheets
        );
    }

    // The unformatted variant is the plain listing payload.
    if !args.format_for_sheets {
        return match tick::get_time_entries_data(api, args.project, args.start_date, args.end_date)
            .await
        {
            Ok(output) => tool_result(&output),
            Err(err) => tool_error(err, "fetch time entries"),
        };
    }

    // Failures here happen while fetching; formatting itself cannot fail.
    match tick::get_time_entries_for_sheets_data(api, args.project, args.start_date, args.end_date)
        .await
    {
        Ok(output) => tool_result(&output),
        Err(err) => tool_error(err, "fetch time entries"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::transport::TransportError;
    use reqwest::Method;
    use serde_json::Value;

    /// Transport whose every request fails, for exercising error payloads.
    struct DownTransport;

    impl Transport for DownTransport {
        async fn request(
            &self,
            _method: Method,
            _path: &str,
            _query: &[(String, String)],
            _body: Option<&Value>,
        ) -> Result<Value, TransportError> {
            Err(TransportError::Status {
                status: 500,
                message: "server error".to_string(),
            })
        }
    }

    fn error_payload(result: &Value) -> Value {
        assert_eq!(result["isError"], json!(true));
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_sheets_fetch_failure_uses_fetch_message() {
        let api = TickApi::new(DownTransport);
        let global = crate::Global { verbose: false };

        let result = handle_get_time_entries_for_sheets(
            Some(json!({"format_for_sheets": true})),
            &api,
            &global,
        )
        .await
        .unwrap();

        let message = error_payload(&result)["error"].as_str().unwrap().to_string();
        assert!(message.starts_with("Failed to fetch time entries:"), "{message}");
    }

    #[tokio::test]
    async fn test_entries_fetch_failure_uses_fetch_message() {
        let api = TickApi::new(DownTransport);
        let global = crate::Global { verbose: false };

        let result = handle_get_time_entries(Some(json!({})), &api, &global)
            .await
            .unwrap();

        let message = error_payload(&result)["error"].as_str().unwrap().to_string();
        assert!(message.starts_with("Failed to fetch time entries:"), "{message}");
    }
}
