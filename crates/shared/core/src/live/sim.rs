use serde::{Deserialize, Serialize};

use crate::values::{LeagueId, Timestamp, null_as_default};

/// Simulation clock state carried in every game data update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sim {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "__v", deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub day: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub league: LeagueId,
    #[serde(deserialize_with = "null_as_default")]
    pub phase: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub play_off_round: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub playoffs: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rules: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub season_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub terminology: String,
    pub next_election_end: Option<Timestamp>,
    pub next_phase_time: Option<Timestamp>,
    pub next_season_start: Option<Timestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub era_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub era_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_era_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_era_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub opened_book: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub unlocked_peanuts: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub twgo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub do_the_thing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub labour_one: i64,
}
