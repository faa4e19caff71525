//! Tabular transform for spreadsheet export

use serde::Serialize;
use serde_json::{json, Value};

use super::entries::TimeEntriesOutput;

/// Header row of the sheet export.
pub const SHEET_HEADERS: [&str; 7] =
    ["Date", "Project", "Task", "User", "Hours", "Notes", "Client"];

/// Summary block attached to the sheet payload.
#[derive(Debug, Serialize, PartialEq)]
pub struct SheetsSummary {
    pub total_entries: usize,
    pub total_hours: f64,
    pub date_range: String,
    pub project: String,
}

/// Response shape for the `get_time_entries_for_sheets` tool: a header row
/// followed by one row per entry, ready to write into a spreadsheet range.
#[derive(Debug, Serialize, PartialEq)]
pub struct SheetsOutput {
    pub success: bool,
    pub sheet_data: Vec<Vec<Value>>,
    pub total_rows: usize,
    pub headers: Vec<String>,
    pub summary: SheetsSummary,
}

/// Flatten a listing report into rows. Missing nested fields render as empty
/// strings; hours stay numeric so spreadsheet formulas keep working.
pub fn transform_sheets(listing: &TimeEntriesOutput) -> SheetsOutput {
    let headers: Vec<String> = SHEET_HEADERS.iter().map(|h| h.to_string()).collect();
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(listing.entries.len() + 1);
    rows.push(SHEET_HEADERS.iter().map(|h| json!(h)).collect());

    for entry in &listing.entries {
        rows.push(vec![
            json!(entry.date()),
            json!(entry.project_name()),
            json!(entry.task_name()),
            json!(entry.user_full_name()),
            json!(entry.hours()),
            json!(entry.notes()),
            json!(entry.client_name()),
        ]);
    }

    SheetsOutput {
        success: true,
        total_rows: rows.len(),
        sheet_data: rows,
        headers,
        summary: SheetsSummary {
            total_entries: listing.total_entries,
            total_hours: listing.total_hours,
            date_range: listing.date_range.clone(),
            project: listing.project.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::entries::transform_time_entries;
    use crate::tick::types::{ClientRef, EntryProject, EntryTask, EntryUser, TimeEntry};

    fn full_entry() -> TimeEntry {
        TimeEntry {
            id: 1,
            date: Some("2024-03-01".to_string()),
            hours: Some(2.5),
            notes: Some("standup".to_string()),
            project: Some(EntryProject {
                id: 10,
                name: "Acme".to_string(),
                client: Some(ClientRef {
                    id: 5,
                    name: "Acme Inc".to_string(),
                }),
            }),
            task: Some(EntryTask {
                id: 20,
                name: "Design".to_string(),
            }),
            user: Some(EntryUser {
                id: 30,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            }),
        }
    }

    #[test]
    fn test_transform_sheets_rows() {
        let listing = transform_time_entries(None, None, None, None, vec![full_entry()]);

        let output = transform_sheets(&listing);

        assert!(output.success);
        assert_eq!(output.total_rows, 2);
        assert_eq!(output.sheet_data[0][0], json!("Date"));
        assert_eq!(
            output.sheet_data[1],
            vec![
                json!("2024-03-01"),
                json!("Acme"),
                json!("Design"),
                json!("Ada Lovelace"),
                json!(2.5),
                json!("standup"),
                json!("Acme Inc"),
            ]
        );
        assert_eq!(output.summary.total_hours, 2.5);
        assert_eq!(output.summary.project, "All projects");
    }

    #[test]
    fn test_transform_sheets_missing_nested_fields_render_empty() {
        let listing = transform_time_entries(None, None, None, None, vec![TimeEntry::default()]);

        let output = transform_sheets(&listing);

        let row = &output.sheet_data[1];
        assert_eq!(row[0], json!(""));
        assert_eq!(row[1], json!(""));
        assert_eq!(row[3], json!(""));
        assert_eq!(row[4], json!(0.0));
        assert_eq!(row[6], json!(""));
    }
}
