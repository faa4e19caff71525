//! Domain models and pure transformations for the Tick time-tracking API
//!
//! Tick (tickspot.com) returns loosely-typed JSON with optional nested
//! records. The types in [`types`] give every field the shell or the
//! aggregations touch an explicit default, so "missing field" behavior is a
//! typed accessor rather than an ad hoc fallback scattered through the
//! transforms.

pub mod clients;
pub mod entries;
pub mod mutation;
pub mod period;
pub mod projects;
pub mod resolve;
pub mod sheets;
pub mod summary;
pub mod team;
pub mod types;

pub use clients::{transform_clients, ClientRow, ClientsOutput};
pub use entries::{transform_time_entries, TimeEntriesOutput};
pub use mutation::{build_create_body, build_update_body, NoFieldsToUpdate};
pub use period::{parse_date, period_range, DateRange, InvalidDate, InvalidPeriod, Period};
pub use projects::{
    transform_projects, transform_tasks, ProjectRow, ProjectsOutput, TaskRow, TasksOutput,
};
pub use resolve::{candidate_names, find_match, Named};
pub use sheets::{transform_sheets, SheetsOutput, SheetsSummary, SHEET_HEADERS};
pub use summary::{summarize, transform_period_summary, EntriesSummary, GroupedHours, PeriodSummaryOutput};
pub use team::{transform_team, TeamMember, TeamOutput};
pub use types::{Client, Project, Task, TimeEntry, User};
