//! Payload unmarshaling
//!
//! Turns a recognized envelope into a typed update. A payload that fails to
//! parse is rejected whole; nothing is partially decoded.

use blaseball_core::{GameData, LeagueData};

use super::envelope::{self, Envelope, UpdateKind};
use crate::error::DecodeError;

/// A decoded feed update
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Reference data, merged into the entity store
    League(LeagueData),
    /// Live game state, handed to the observer
    Game(GameData),
}

impl Update {
    pub fn kind(&self) -> UpdateKind {
        match self {
            Update::League(_) => UpdateKind::League,
            Update::Game(_) => UpdateKind::Game,
        }
    }
}

/// Deserialize the envelope body according to its kind
pub fn unmarshal(envelope: Envelope<'_>) -> Result<Update, DecodeError> {
    let Envelope { kind, body } = envelope;
    let parse_err = |source| DecodeError::Parse { kind, source };

    match kind {
        UpdateKind::League => serde_json::from_slice(body)
            .map(Update::League)
            .map_err(parse_err),
        UpdateKind::Game => serde_json::from_slice(body)
            .map(Update::Game)
            .map_err(parse_err),
    }
}

/// Decode a raw frame all the way to a typed update
pub fn decode_update(frame: &[u8]) -> Result<Update, DecodeError> {
    unmarshal(envelope::decode(frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blaseball_core::{Division, League, SubLeague, Team};
    use serde_json::json;

    fn league_frame(data: &LeagueData) -> Vec<u8> {
        let body = serde_json::to_vec(data).unwrap();
        envelope::encode(UpdateKind::League, &body)
    }

    #[test]
    fn test_league_update_round_trip() {
        let mut team = Team::new("T1", "Mild High Horses");
        team.lineup = vec!["p1".to_string(), "p2".to_string()];
        team.permanent_attributes = vec!["BIRD_SEED".to_string()];
        team.championships = 3;

        let data = LeagueData {
            teams: vec![team],
            subleagues: vec![SubLeague::new("SL1", "The Good League")],
            divisions: vec![Division::new("D1", "Good High")],
            leagues: vec![League::new("L1", "ILB")],
        };

        let update = decode_update(&league_frame(&data)).unwrap();
        assert_eq!(update, Update::League(data));
        assert_eq!(update.kind(), UpdateKind::League);
    }

    #[test]
    fn test_game_update_from_wire_json() {
        let frame = format!(
            r#"42["gameDataUpdate",{}]"#,
            json!({
                "sim": {"_id": "thisidisstaticyo", "day": 3, "season": 1},
                "season": {"_id": "S", "seasonNumber": 1},
                "standings": {"_id": "ST", "wins": {"T1": 2}, "losses": {"T2": 2}},
                "schedule": [{
                    "_id": "G1",
                    "awayTeam": "T1",
                    "homeTeam": "T2",
                    "basesOccupied": [1]
                }],
                "tomorrowSchedule": [{"_id": "G2", "awayTeam": "T2", "homeTeam": "T1"}],
                "postseason": {"playoffs": null}
            })
        );

        let Update::Game(data) = decode_update(frame.as_bytes()).unwrap() else {
            panic!("Expected game update");
        };
        assert_eq!(data.sim.unwrap().day, 3);
        assert_eq!(data.standings.unwrap().record("T1"), (2, 0));
        assert_eq!(data.schedule[0].bases_occupied, vec![1]);
        assert_eq!(data.tomorrow_schedule[0].id, "G2");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let frame = br#"42["leagueDataUpdate",{"teams":[}]"#;
        match decode_update(frame) {
            Err(DecodeError::Parse { kind, .. }) => assert_eq!(kind, UpdateKind::League),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_type_mismatch_is_parse_error() {
        let frame = br#"42["gameDataUpdate",{"schedule":[{"_id":"G1","inning":"sixth"}]}]"#;
        match decode_update(frame) {
            Err(DecodeError::Parse { kind, .. }) => assert_eq!(kind, UpdateKind::Game),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_null_scalars_decode_as_defaults() {
        let frame = format!(
            r#"42["gameDataUpdate",{}]"#,
            json!({"schedule": [{
                "_id": "G1",
                "awayTeam": "T1",
                "homeTeam": "T2",
                "awayBatter": null,
                "homeBatter": null,
                "halfInningOuts": null
            }]})
        );
        let Update::Game(data) = decode_update(frame.as_bytes()).unwrap() else {
            panic!("Expected game update");
        };
        assert_eq!(data.schedule[0].away_team, "T1");
        assert!(data.schedule[0].away_batter.is_empty());
        assert!(data.schedule[0].home_batter.is_empty());
        assert_eq!(data.schedule[0].half_inning_outs, 0);

        let frame = format!(
            r#"42["leagueDataUpdate",{}]"#,
            json!({"teams": [{
                "_id": "T1",
                "fullName": "Mild High Horses",
                "slogan": null,
                "shameRuns": null
            }]})
        );
        let Update::League(data) = decode_update(frame.as_bytes()).unwrap() else {
            panic!("Expected league update");
        };
        assert_eq!(data.teams[0].full_name, "Mild High Horses");
        assert!(data.teams[0].slogan.is_empty());
        assert_eq!(data.teams[0].shame_runs, 0);
    }

    #[test]
    fn test_unrecognized_frame_passes_through() {
        assert!(matches!(
            decode_update(b"3"),
            Err(DecodeError::UnrecognizedFrame)
        ));
    }
}
