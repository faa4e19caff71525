//! Request-body construction for time-entry mutations
//!
//! Pure builders so field-presence validation happens before any network
//! call; the shell only ships the returned body.

use serde_json::{json, Value};

/// Update rejected because neither optional field was supplied.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Must provide either hours or notes to update")]
pub struct NoFieldsToUpdate;

/// Body for `POST /projects/{id}/time_entries.json`.
pub fn build_create_body(task_id: u64, hours: f64, date: &str, notes: &str) -> Value {
    json!({
        "task_id": task_id,
        "hours": hours,
        "date": date,
        "notes": notes,
    })
}

/// Body for `PUT /time_entries/{id}.json`. Only supplied fields are sent, so
/// an hours-only update leaves notes untouched and vice versa.
pub fn build_update_body(
    hours: Option<f64>,
    notes: Option<&str>,
) -> Result<Value, NoFieldsToUpdate> {
    if hours.is_none() && notes.is_none() {
        return Err(NoFieldsToUpdate);
    }

    let mut body = serde_json::Map::new();
    if let Some(hours) = hours {
        body.insert("hours".to_string(), json!(hours));
    }
    if let Some(notes) = notes {
        body.insert("notes".to_string(), json!(notes));
    }
    Ok(Value::Object(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_create_body() {
        let body = build_create_body(42, 2.5, "2024-03-01", "standup");

        assert_eq!(
            body,
            json!({"task_id": 42, "hours": 2.5, "date": "2024-03-01", "notes": "standup"})
        );
    }

    #[test]
    fn test_build_update_body_requires_a_field() {
        assert_eq!(build_update_body(None, None), Err(NoFieldsToUpdate));
    }

    #[test]
    fn test_build_update_body_notes_only_leaves_hours_out() {
        let body = build_update_body(None, Some("fixed")).unwrap();

        assert_eq!(body, json!({"notes": "fixed"}));
        assert!(body.get("hours").is_none());
    }

    #[test]
    fn test_build_update_body_both_fields() {
        let body = build_update_body(Some(1.0), Some("x")).unwrap();

        assert_eq!(body, json!({"hours": 1.0, "notes": "x"}));
    }
}
