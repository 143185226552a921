//! Payload records carried by the two feed events

use serde::{Deserialize, Serialize};

use crate::entities::{Division, League, SubLeague, Team};
use crate::live::{Game, PostSeason, Season, Sim, Standings};
use crate::values::null_as_default;

/// Reference data batch (`leagueDataUpdate`).
///
/// A batch may carry any subset of the four entity kinds; missing kinds are
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueData {
    #[serde(deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,
    #[serde(deserialize_with = "null_as_default")]
    pub subleagues: Vec<SubLeague>,
    #[serde(deserialize_with = "null_as_default")]
    pub divisions: Vec<Division>,
    #[serde(deserialize_with = "null_as_default")]
    pub leagues: Vec<League>,
}

impl LeagueData {
    /// Total number of records across all four kinds
    pub fn len(&self) -> usize {
        self.teams.len() + self.subleagues.len() + self.divisions.len() + self.leagues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live game batch (`gameDataUpdate`). Consumed once; never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameData {
    pub sim: Option<Sim>,
    pub season: Option<Season>,
    pub standings: Option<Standings>,
    #[serde(deserialize_with = "null_as_default")]
    pub schedule: Vec<Game>,
    #[serde(deserialize_with = "null_as_default")]
    pub tomorrow_schedule: Vec<Game>,
    pub postseason: Option<PostSeason>,
}

impl GameData {
    /// Today's game involving the given team, if one is scheduled
    pub fn game_for_team(&self, team_id: &str) -> Option<&Game> {
        self.schedule.iter().find(|g| g.involves(team_id))
    }
}
