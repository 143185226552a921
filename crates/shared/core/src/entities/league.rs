use serde::{Deserialize, Serialize};

use crate::values::{LeagueId, SubLeagueId, null_as_default};

/// Top of the league hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct League {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: LeagueId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subleagues: Vec<SubLeagueId>,
    /// Id of the tiebreaker ordering; not resolved by the client
    #[serde(deserialize_with = "null_as_default")]
    pub tiebreakers: String,
}

impl League {
    pub fn new(id: impl Into<LeagueId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subleagues: Vec::new(),
            tiebreakers: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Division, SubLeague};
    use serde_json::json;

    #[test]
    fn test_hierarchy_is_id_references() {
        let league: League = serde_json::from_value(json!({
            "_id": "L",
            "name": "Internet League Blaseball",
            "subleagues": ["SL1", "SL2"],
            "tiebreakers": "TB"
        }))
        .unwrap();
        let sub: SubLeague = serde_json::from_value(json!({
            "_id": "SL1", "name": "The Good League", "divisions": ["D1"]
        }))
        .unwrap();
        let division: Division = serde_json::from_value(json!({
            "_id": "D1", "name": "Good High", "teams": ["T1", "T2"]
        }))
        .unwrap();

        assert_eq!(league.subleagues, vec!["SL1", "SL2"]);
        assert_eq!(league.tiebreakers, "TB");
        assert_eq!(sub.divisions, vec!["D1"]);
        assert!(division.contains_team("T2"));
        assert!(!division.contains_team("T3"));
    }
}
