use serde::{Deserialize, Serialize};

use crate::values::{DivisionId, TeamId, null_as_default};

/// Lowest level of the league hierarchy: a named group of team ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Division {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: DivisionId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub teams: Vec<TeamId>,
}

impl Division {
    pub fn new(id: impl Into<DivisionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            teams: Vec::new(),
        }
    }

    /// Whether the division lists the given team
    pub fn contains_team(&self, team_id: &str) -> bool {
        self.teams.iter().any(|t| t == team_id)
    }
}
