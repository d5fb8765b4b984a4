use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::PersonId;

/// Department tag the upstream search endpoint attaches to people who are
/// primarily known for directing.
pub const DIRECTING_DEPARTMENT: &str = "Directing";

/// Crew role string used for directing credits. Case-sensitive exact match.
pub const DIRECTOR_JOB: &str = "Director";

/// A director record as shown on the detail view.
///
/// Fetched on demand by id and held only for the lifetime of the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub id: PersonId,
    pub name: String,
    pub profile_path: Option<String>,
    /// Free-text biography; empty when the upstream has none.
    pub biography: String,
    pub birthday: Option<NaiveDate>,
    pub deathday: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub known_for_department: String,
}

/// Lightweight projection of a person used during incremental search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
    pub profile_path: Option<String>,
    pub known_for_department: String,
}

impl PersonSummary {
    /// Whether this person belongs in a director result list.
    ///
    /// The upstream search endpoint cannot filter by role, so this check is
    /// applied client-side after retrieval.
    pub fn is_director(&self) -> bool {
        self.known_for_department == DIRECTING_DEPARTMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(department: &str) -> PersonSummary {
        PersonSummary {
            id: PersonId::new(525).unwrap(),
            name: "Christopher Nolan".to_string(),
            profile_path: None,
            known_for_department: department.to_string(),
        }
    }

    #[test]
    fn directing_department_is_exact_match() {
        assert!(summary("Directing").is_director());
        assert!(!summary("Writing").is_director());
        assert!(!summary("directing").is_director());
        assert!(!summary("").is_director());
    }
}
