use ticktools_core::tick::{InvalidDate, InvalidPeriod, NoFieldsToUpdate};

use crate::tick::transport::TransportError;

/// Failure of a single tool operation.
///
/// Validation variants are detected before any network call; the not-found
/// variants carry the full candidate name list so callers can retry with a
/// corrected name. MCP handlers turn every variant into a structured error
/// value rather than a protocol error.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),

    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriod),

    #[error(transparent)]
    NoFieldsToUpdate(#[from] NoFieldsToUpdate),

    #[error("Project '{name}' not found")]
    ProjectNotFound { name: String, available: Vec<String> },

    #[error("Task '{task}' not found in project '{project}'")]
    TaskNotFound {
        task: String,
        project: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}
