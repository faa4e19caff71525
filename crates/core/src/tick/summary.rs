//! Aggregation of flat time-entry collections into grouped summaries

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::period::DateRange;
use super::types::TimeEntry;

/// An insertion-ordered group-key → summed-hours mapping.
///
/// Serializes as a JSON object in its current order, so a desc-sorted view
/// stays desc-sorted on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedHours(Vec<(String, f64)>);

impl GroupedHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `hours` to `key`, inserting the key at the end on first sight.
    pub fn add(&mut self, key: &str, hours: f64) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, sum)) => *sum += hours,
            None => self.0.push((key.to_string(), hours)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Ranked view: summed hours descending, ties keeping encounter order.
    pub fn sorted_desc(&self) -> GroupedHours {
        let mut pairs = self.0.clone();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        GroupedHours(pairs)
    }
}

impl Serialize for GroupedHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, hours) in &self.0 {
            map.serialize_entry(key, hours)?;
        }
        map.end()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for GroupedHours {
    fn from(pairs: [(&str, f64); N]) -> Self {
        GroupedHours(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

/// Derived statistics over a flat collection of time entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntriesSummary {
    pub total_hours: f64,
    pub total_entries: usize,
    pub by_user: GroupedHours,
    pub by_project: GroupedHours,
    pub by_date: GroupedHours,
    pub average_per_day: f64,
}

/// Aggregate entries into totals and the three grouped views.
///
/// Missing `hours` count as zero and missing group keys fall back to
/// `"Unknown"` (see [`TimeEntry`] accessors). The `max(1, ..)` guard keeps
/// the empty entry set at an average of zero instead of dividing by zero.
pub fn summarize(entries: &[TimeEntry]) -> EntriesSummary {
    let mut by_user = GroupedHours::new();
    let mut by_project = GroupedHours::new();
    let mut by_date = GroupedHours::new();
    let mut total_hours = 0.0;

    for entry in entries {
        let hours = entry.hours();
        total_hours += hours;
        by_user.add(entry.user_key(), hours);
        by_project.add(entry.project_key(), hours);
        by_date.add(entry.date_key(), hours);
    }

    let average_per_day = total_hours / std::cmp::max(1, by_date.len()) as f64;

    EntriesSummary {
        total_hours,
        total_entries: entries.len(),
        by_user,
        by_project,
        by_date,
        average_per_day,
    }
}

/// Response shape for the `get_time_summary_by_period` tool.
#[derive(Debug, Serialize, PartialEq)]
pub struct PeriodSummaryOutput {
    pub period: String,
    pub date_range: String,
    pub total_hours: f64,
    pub total_entries: usize,
    pub average_hours_per_day: f64,
    pub hours_by_project: GroupedHours,
    pub hours_by_date: GroupedHours,
}

/// Assemble the period report: project breakdown ranked by hours descending,
/// daily breakdown in encounter order.
pub fn transform_period_summary(
    period: super::period::Period,
    range: DateRange,
    entries: &[TimeEntry],
) -> PeriodSummaryOutput {
    let summary = summarize(entries);

    PeriodSummaryOutput {
        period: period.to_string(),
        date_range: range.label(),
        total_hours: summary.total_hours,
        total_entries: summary.total_entries,
        average_hours_per_day: summary.average_per_day,
        hours_by_project: summary.by_project.sorted_desc(),
        hours_by_date: summary.by_date,
    }
}
