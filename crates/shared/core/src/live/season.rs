use serde::{Deserialize, Serialize};

use crate::values::{LeagueId, null_as_default};

/// Season metadata. The string fields are ids of documents the feed does not send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Season {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "__v", deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub league: LeagueId,
    #[serde(deserialize_with = "null_as_default")]
    pub rules: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schedule: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub standings: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: String,
    #[serde(deserialize_with = "null_as_default")]
    pub terminology: String,
}
