use serde::{Deserialize, Serialize};

use crate::values::{DivisionId, SubLeagueId, null_as_default};

/// Middle level of the league hierarchy: groups divisions by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubLeague {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: SubLeagueId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub divisions: Vec<DivisionId>,
}

impl SubLeague {
    pub fn new(id: impl Into<SubLeagueId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            divisions: Vec::new(),
        }
    }
}
