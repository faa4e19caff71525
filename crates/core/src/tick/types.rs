//! Serde models for Tick API responses
//!
//! Every optional field has a documented default, exposed through an accessor
//! so the transforms never reach into `Option`s themselves:
//!
//! - numeric fields (`budget`, `hours`, `sum_hours`) default to `0.0`
//! - `closed` defaults to `false`
//! - a missing project client renders as `"No client"`
//! - a missing project owner or entry user renders as `"Unknown"`

use serde::{Deserialize, Serialize};

/// Placeholder for a missing user/project/date group key.
pub const UNKNOWN: &str = "Unknown";

/// A project as returned by `GET /projects.json`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub budget: Option<f64>,
    /// Hours logged against the project so far.
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub closed: Option<bool>,
    #[serde(default)]
    pub client: Option<ClientRef>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

impl Project {
    pub fn budget(&self) -> f64 {
        self.budget.unwrap_or(0.0)
    }

    pub fn hours(&self) -> f64 {
        self.hours.unwrap_or(0.0)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or(false)
    }

    pub fn client_id(&self) -> Option<u64> {
        self.client.as_ref().map(|c| c.id)
    }

    pub fn client_name(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("No client")
    }

    pub fn owner_name(&self) -> &str {
        self.owner
            .as_ref()
            .map(|o| o.first_name.as_str())
            .unwrap_or(UNKNOWN)
    }
}

/// Client reference nested inside a project.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ClientRef {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Project owner reference. Tick only exposes the first name here.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Owner {
    #[serde(default)]
    pub first_name: String,
}

/// A task as returned by `GET /projects/{id}/tasks.json`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub sum_hours: Option<f64>,
    #[serde(default)]
    pub closed: Option<bool>,
}

impl Task {
    pub fn budget(&self) -> f64 {
        self.budget.unwrap_or(0.0)
    }

    pub fn hours_used(&self) -> f64 {
        self.sum_hours.unwrap_or(0.0)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or(false)
    }
}

/// A time entry as returned by the `time_entries.json` endpoints.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TimeEntry {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub project: Option<EntryProject>,
    #[serde(default)]
    pub task: Option<EntryTask>,
    #[serde(default)]
    pub user: Option<EntryUser>,
}

impl TimeEntry {
    /// Missing hours count as zero in every aggregation.
    pub fn hours(&self) -> f64 {
        self.hours.unwrap_or(0.0)
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }

    /// Group key for the by-date view: the date string, or `"Unknown"`.
    pub fn date_key(&self) -> &str {
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => UNKNOWN,
        }
    }

    /// Group key for the by-user view: the user's first name, or `"Unknown"`.
    pub fn user_key(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.first_name.as_str())
            .unwrap_or(UNKNOWN)
    }

    /// Group key for the by-project view: the project name, or `"Unknown"`.
    pub fn project_key(&self) -> &str {
        self.project
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN)
    }

    pub fn project_name(&self) -> &str {
        self.project.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    pub fn task_name(&self) -> &str {
        self.task.as_ref().map(|t| t.name.as_str()).unwrap_or("")
    }

    pub fn client_name(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.client.as_ref())
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Full display name ("First Last", trimmed when either part is missing).
    pub fn user_full_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.full_name())
            .unwrap_or_default()
    }
}

/// Project reference nested inside a time entry.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EntryProject {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client: Option<ClientRef>,
}

/// Task reference nested inside a time entry.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EntryTask {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// User reference nested inside a time entry.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EntryUser {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl EntryUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A client as returned by `GET /clients.json`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Client {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// A user as returned by `GET /users.json`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub timezone: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_project_with_nulls() {
        // Tick sends explicit nulls for budget on unbudgeted projects
        let raw = serde_json::json!({
            "id": 16,
            "name": "Internal",
            "budget": null,
            "hours": 12.5,
            "closed": false
        });

        let project: Project = serde_json::from_value(raw).unwrap();

        assert_eq!(project.budget(), 0.0);
        assert_eq!(project.hours(), 12.5);
        assert_eq!(project.client_name(), "No client");
        assert_eq!(project.owner_name(), "Unknown");
    }

    #[test]
    fn test_entry_group_keys_with_missing_records() {
        let entry = TimeEntry::default();

        assert_eq!(entry.user_key(), "Unknown");
        assert_eq!(entry.project_key(), "Unknown");
        assert_eq!(entry.date_key(), "Unknown");
        assert_eq!(entry.hours(), 0.0);
    }

    #[test]
    fn test_user_full_name_trims_missing_parts() {
        let user = EntryUser {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: String::new(),
        };

        assert_eq!(user.full_name(), "Ada");
    }
}
