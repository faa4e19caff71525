//! Time-entry listing report

use serde::Serialize;

use super::summary::{summarize, GroupedHours};
use super::types::TimeEntry;

/// Response shape for the `get_time_entries` tool.
#[derive(Debug, Serialize, PartialEq)]
pub struct TimeEntriesOutput {
    pub project: String,
    pub project_id: Option<u64>,
    pub date_range: String,
    pub total_entries: usize,
    pub total_hours: f64,
    pub hours_by_user: GroupedHours,
    pub entries: Vec<TimeEntry>,
}

/// Assemble the listing report. `project` is the caller's query string when a
/// project filter was applied; the date-range label falls back to
/// `"beginning"` / `"now"` for open ends.
pub fn transform_time_entries(
    project: Option<String>,
    project_id: Option<u64>,
    start_date: Option<&str>,
    end_date: Option<&str>,
    entries: Vec<TimeEntry>,
) -> TimeEntriesOutput {
    let summary = summarize(&entries);

    TimeEntriesOutput {
        project: project.unwrap_or_else(|| "All projects".to_string()),
        project_id,
        date_range: format!(
            "{} to {}",
            start_date.unwrap_or("beginning"),
            end_date.unwrap_or("now")
        ),
        total_entries: summary.total_entries,
        total_hours: summary.total_hours,
        hours_by_user: summary.by_user,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::types::EntryUser;

    fn entry(user: &str, hours: f64) -> TimeEntry {
        TimeEntry {
            hours: Some(hours),
            user: Some(EntryUser {
                id: 1,
                first_name: user.to_string(),
                last_name: String::new(),
            }),
            ..TimeEntry::default()
        }
    }

    #[test]
    fn test_transform_time_entries_filtered() {
        let output = transform_time_entries(
            Some("acme".to_string()),
            Some(16),
            Some("2024-03-01"),
            Some("2024-03-31"),
            vec![entry("Ada", 2.0), entry("Ada", 1.5)],
        );

        assert_eq!(output.project, "acme");
        assert_eq!(output.project_id, Some(16));
        assert_eq!(output.date_range, "2024-03-01 to 2024-03-31");
        assert_eq!(output.total_entries, 2);
        assert_eq!(output.total_hours, 3.5);
        assert_eq!(output.hours_by_user.get("Ada"), Some(3.5));
        assert_eq!(output.entries.len(), 2);
    }

    #[test]
    fn test_transform_time_entries_unfiltered_placeholders() {
        let output = transform_time_entries(None, None, None, None, Vec::new());

        assert_eq!(output.project, "All projects");
        assert_eq!(output.project_id, None);
        assert_eq!(output.date_range, "beginning to now");
        assert_eq!(output.total_hours, 0.0);
    }
}
