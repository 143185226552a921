use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::values::{GameId, PlayerId, TeamId, null_as_default};

/// One matchup, either in progress (today's schedule) or upcoming
/// (tomorrow's schedule). Both schedules share this shape on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Game {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: GameId,
    #[serde(deserialize_with = "null_as_default")]
    pub season: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub day: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub phase: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub terminology: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rules: String,
    #[serde(deserialize_with = "null_as_default")]
    pub statsheet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_update: String,

    #[serde(deserialize_with = "null_as_default")]
    pub away_team: TeamId,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_nickname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_emoji: String,
    #[serde(deserialize_with = "null_as_default")]
    pub away_pitcher: PlayerId,
    #[serde(deserialize_with = "null_as_default")]
    pub away_pitcher_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub away_batter: PlayerId,
    #[serde(deserialize_with = "null_as_default")]
    pub away_batter_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub away_odds: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub away_strikes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub away_score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_batter_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub home_team: TeamId,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_nickname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_emoji: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home_pitcher: PlayerId,
    #[serde(deserialize_with = "null_as_default")]
    pub home_pitcher_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home_batter: PlayerId,
    #[serde(deserialize_with = "null_as_default")]
    pub home_batter_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home_odds: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub home_strikes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub home_score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_batter_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub inning: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub top_of_inning: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub half_inning_outs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub half_inning_score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub at_bat_balls: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub at_bat_strikes: i64,
    /// Occupied base indices, parallel to `base_runners`
    #[serde(deserialize_with = "null_as_default")]
    pub bases_occupied: Vec<u8>,
    #[serde(deserialize_with = "null_as_default")]
    pub base_runners: Vec<PlayerId>,
    #[serde(deserialize_with = "null_as_default")]
    pub baserunner_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub series_index: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub series_length: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub weather: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub is_postseason: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub game_complete: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub finalized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub game_start: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub shame: bool,

    /// Event outcomes of unknown structure, kept verbatim
    #[serde(deserialize_with = "null_as_default")]
    pub outcomes: Vec<Value>,
}

impl Game {
    /// Whether either side of the matchup is the given team
    pub fn involves(&self, team_id: &str) -> bool {
        self.away_team == team_id || self.home_team == team_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_live_counters() {
        let game: Game = serde_json::from_value(json!({
            "_id": "G1",
            "awayTeam": "T1",
            "awayTeamName": "Mild High Horses",
            "homeTeam": "T2",
            "homeTeamName": "Hawai'i Fridays",
            "awayScore": 3,
            "homeScore": 5,
            "inning": 6,
            "topOfInning": true,
            "halfInningOuts": 2,
            "atBatBalls": 3,
            "atBatStrikes": 1,
            "basesOccupied": [0, 2],
            "baseRunners": ["p1", "p2"],
            "homeOdds": 0.5512,
            "gameStart": true,
            "outcomes": ["Incineration!", {"kind": 7}]
        }))
        .unwrap();

        assert_eq!(game.away_score, 3);
        assert_eq!(game.home_score, 5);
        assert_eq!(game.bases_occupied, vec![0, 2]);
        assert!(game.top_of_inning);
        assert!(!game.game_complete);
        assert!(game.involves("T2"));
        assert!(!game.involves("T3"));
        assert_eq!(game.outcomes[1], json!({"kind": 7}));
    }

    #[test]
    fn test_opaque_outcomes_survive_reserialization() {
        let outcomes = json!([{"nested": {"deep": [1, 2, 3]}}, null, "text"]);
        let game: Game = serde_json::from_value(json!({"_id": "G", "outcomes": outcomes})).unwrap();

        let back = serde_json::to_value(&game).unwrap();
        assert_eq!(back["outcomes"], outcomes);
    }

    #[test]
    fn test_nobody_at_bat() {
        let game: Game = serde_json::from_value(json!({
            "_id": "G1",
            "awayBatter": null,
            "awayBatterName": null,
            "homeBatter": null,
            "homeOdds": null,
            "inning": null,
            "topOfInning": null
        }))
        .unwrap();

        assert!(game.away_batter.is_empty());
        assert!(game.home_batter.is_empty());
        assert_eq!(game.home_odds, 0.0);
        assert_eq!(game.inning, 0);
        assert!(!game.top_of_inning);
    }
}
