//! Name resolution for human-typed project and task names
//!
//! Tick tools accept partial, case-insensitive names ("acme" for
//! "Acme Corp"). The match rule is deliberately simple: the first candidate
//! in listing order whose folded name contains the folded query wins. There
//! is no scoring or ranking; ties resolve by source order and an empty query
//! matches the first candidate.

use super::types::{Project, Task};

/// An entity that can be resolved by name.
pub trait Named {
    fn id(&self) -> u64;
    fn name(&self) -> &str;
}

impl Named for Project {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Task {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Find the id of the first candidate whose name contains `query`
/// (case-insensitive substring match, listing order).
pub fn find_match<T: Named>(candidates: &[T], query: &str) -> Option<u64> {
    let folded = query.to_lowercase();
    candidates
        .iter()
        .find(|candidate| candidate.name().to_lowercase().contains(&folded))
        .map(Named::id)
}

/// The full candidate name list, used as the suggestion set on a failed
/// resolution.
pub fn candidate_names<T: Named>(candidates: &[T]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| candidate.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            ..Project::default()
        }
    }

    #[test]
    fn test_find_match_first_hit_wins() {
        let candidates = vec![project(1, "Acme Corp"), project(2, "Acme Labs")];

        assert_eq!(find_match(&candidates, "acme"), Some(1));
    }

    #[test]
    fn test_find_match_is_case_insensitive() {
        let candidates = vec![project(7, "Website Redesign")];

        assert_eq!(find_match(&candidates, "WEBSITE"), Some(7));
        assert_eq!(find_match(&candidates, "redesign"), Some(7));
    }

    #[test]
    fn test_find_match_no_hit() {
        let candidates = vec![project(1, "Acme Corp"), project(2, "Acme Labs")];

        assert_eq!(find_match(&candidates, "zzz"), None);
        assert_eq!(
            candidate_names(&candidates),
            vec!["Acme Corp".to_string(), "Acme Labs".to_string()]
        );
    }

    #[test]
    fn test_find_match_empty_query_matches_first() {
        let candidates = vec![project(3, "First"), project(4, "Second")];

        assert_eq!(find_match(&candidates, ""), Some(3));
    }

    #[test]
    fn test_find_match_empty_candidates() {
        let candidates: Vec<Project> = Vec::new();

        assert_eq!(find_match(&candidates, "anything"), None);
    }
}
