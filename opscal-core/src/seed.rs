//! Seed document types: cohorts and the assignee roster.
//!
//! The seed is fetched once per session and treated as immutable after
//! load. Field names follow the seed JSON wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated intake group of program participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    pub id: String,
    pub name: String,
    /// First calendar day of the program's first week. Template offsets
    /// count from here.
    #[serde(rename = "week1Start")]
    pub week1_start: NaiveDate,
}

/// A staff member who may own tasks. The roster can change between
/// sessions without task identities changing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub name: String,
}

/// The external seed document the application starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    pub cohorts: Vec<Cohort>,
    pub assignees: Vec<Assignee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses_wire_format() {
        let raw = r#"{
            "cohorts": [{"id": "7", "name": "Cohort 7", "week1Start": "2024-03-04"}],
            "assignees": [{"id": "a1", "name": "Kim"}]
        }"#;
        let seed: Seed = serde_json::from_str(raw).unwrap();
        assert_eq!(seed.cohorts[0].week1_start, "2024-03-04".parse().unwrap());
        assert_eq!(seed.assignees[0].name, "Kim");
    }
}
