use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::values::{TeamId, null_as_default};

/// Win/loss counts keyed by team id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standings {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "__v", deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: HashMap<TeamId, i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: HashMap<TeamId, i64>,
}

impl Standings {
    /// (wins, losses) for a team; teams absent from the maps count as 0
    pub fn record(&self, team_id: &str) -> (i64, i64) {
        (
            self.wins.get(team_id).copied().unwrap_or(0),
            self.losses.get(team_id).copied().unwrap_or(0),
        )
    }
}
