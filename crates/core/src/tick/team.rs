//! Team overview: users enriched with their last-7-days activity

use serde::Serialize;

use super::types::{TimeEntry, User};

/// One row of the `get_team_overview` report.
#[derive(Debug, Serialize, PartialEq)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub recent_hours_7_days: f64,
    pub recent_entries_7_days: usize,
    pub timezone: String,
    pub is_active: bool,
}

/// Response shape for the `get_team_overview` tool.
#[derive(Debug, Serialize, PartialEq)]
pub struct TeamOutput {
    pub total_users: usize,
    pub active_users_last_7_days: usize,
    pub total_hours_last_7_days: f64,
    pub average_hours_per_active_user: f64,
    pub users: Vec<TeamMember>,
}

/// Enrich the user list with activity derived from `recent_entries`.
///
/// "Active" is strictly "recent hours > 0"; a user with entries summing to
/// zero hours does not count. Entries without a user id are ignored.
pub fn transform_team(users: &[User], recent_entries: &[TimeEntry]) -> TeamOutput {
    let members: Vec<TeamMember> = users
        .iter()
        .map(|user| {
            let mut hours = 0.0;
            let mut count = 0;
            for entry in recent_entries {
                if entry.user_id() == Some(user.id) {
                    hours += entry.hours();
                    count += 1;
                }
            }

            TeamMember {
                id: user.id,
                name: user.full_name(),
                email: user.email.clone(),
                recent_hours_7_days: hours,
                recent_entries_7_days: count,
                timezone: user.timezone.clone(),
                is_active: hours > 0.0,
            }
        })
        .collect();

    // Total over attributed entries only, matching the per-user sums.
    let total_hours: f64 = recent_entries
        .iter()
        .filter(|e| e.user_id().is_some())
        .map(TimeEntry::hours)
        .sum();
    let active = members.iter().filter(|m| m.is_active).count();

    TeamOutput {
        total_users: users.len(),
        active_users_last_7_days: active,
        total_hours_last_7_days: total_hours,
        average_hours_per_active_user: total_hours / std::cmp::max(1, active) as f64,
        users: members,
    }
}
