use serde::{Deserialize, Serialize};

use crate::values::{PlayerId, TeamId, null_as_default};

/// Which of a team's four rosters a player slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterSlot {
    Lineup,
    Rotation,
    Bullpen,
    Bench,
}

impl RosterSlot {
    /// All roster slots in the order the feed lists them
    pub const ALL: [RosterSlot; 4] = [
        RosterSlot::Lineup,
        RosterSlot::Rotation,
        RosterSlot::Bullpen,
        RosterSlot::Bench,
    ];
}

/// A team as delivered in a league data update.
///
/// Rosters hold player ids in the order the feed sends them; the order is
/// meaningful (batting order, pitching rotation) and is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: TeamId,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nickname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shorthand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub main_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emoji: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slogan: String,

    #[serde(deserialize_with = "null_as_default")]
    pub lineup: Vec<PlayerId>,
    #[serde(deserialize_with = "null_as_default")]
    pub rotation: Vec<PlayerId>,
    #[serde(deserialize_with = "null_as_default")]
    pub bullpen: Vec<PlayerId>,
    #[serde(deserialize_with = "null_as_default")]
    pub bench: Vec<PlayerId>,

    /// Attribute tags that expire at the end of the season
    #[serde(deserialize_with = "null_as_default")]
    pub season_attributes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub permanent_attributes: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub shame_runs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_shames: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_shamings: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub season_shames: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub season_shamings: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub championships: i64,
}

impl Team {
    /// Create a team with only identity and display name set
    pub fn new(id: impl Into<TeamId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Player ids in the given roster
    pub fn roster(&self, slot: RosterSlot) -> &[PlayerId] {
        match slot {
            RosterSlot::Lineup => &self.lineup,
            RosterSlot::Rotation => &self.rotation,
            RosterSlot::Bullpen => &self.bullpen,
            RosterSlot::Bench => &self.bench,
        }
    }

    /// Every player id on the team, lineup first, bench last
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        RosterSlot::ALL
            .into_iter()
            .flat_map(move |slot| self.roster(slot).iter())
    }

    /// Which roster a player sits on, if any
    pub fn slot_of(&self, player_id: &str) -> Option<RosterSlot> {
        RosterSlot::ALL
            .into_iter()
            .find(|slot| self.roster(*slot).iter().any(|p| p == player_id))
    }

    /// True if the tag is present in either attribute list
    pub fn has_attribute(&self, tag: &str) -> bool {
        self.season_attributes
            .iter()
            .chain(self.permanent_attributes.iter())
            .any(|a| a == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "_id": "b72f3061-f573-40d7-832a-5ad475bd7909",
            "fullName": "San Francisco Lovers",
            "location": "San Francisco",
            "nickname": "Lovers",
            "shorthand": "SFL",
            "mainColor": "#780018",
            "secondaryColor": "#e0607a",
            "emoji": "0x1F48B",
            "slogan": "Love Wins",
            "lineup": ["p1", "p2"],
            "rotation": ["p3"],
            "bullpen": ["p4"],
            "bench": ["p5"],
            "seasonAttributes": [],
            "permanentAttributes": ["LOVE"],
            "shameRuns": 0,
            "totalShames": 3,
            "totalShamings": 5,
            "seasonShames": 1,
            "seasonShamings": 0,
            "championships": 1
        })
    }

    #[test]
    fn test_deserialize_wire_names() {
        let team: Team = serde_json::from_value(sample()).unwrap();
        assert_eq!(team.id, "b72f3061-f573-40d7-832a-5ad475bd7909");
        assert_eq!(team.full_name, "San Francisco Lovers");
        assert_eq!(team.main_color, "#780018");
        assert_eq!(team.total_shamings, 5);
        assert_eq!(team.lineup, vec!["p1", "p2"]);
    }

    #[test]
    fn test_rosters_keep_order() {
        let team: Team = serde_json::from_value(sample()).unwrap();
        let all: Vec<&str> = team.player_ids().map(String::as_str).collect();
        assert_eq!(all, vec!["p1", "p2", "p3", "p4", "p5"]);
        assert_eq!(team.roster(RosterSlot::Rotation), ["p3".to_string()]);
        assert_eq!(team.slot_of("p4"), Some(RosterSlot::Bullpen));
        assert_eq!(team.slot_of("nobody"), None);
    }

    #[test]
    fn test_has_attribute() {
        let team: Team = serde_json::from_value(sample()).unwrap();
        assert!(team.has_attribute("LOVE"));
        assert!(!team.has_attribute("FIREPROOF"));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let team: Team = serde_json::from_value(json!({
            "_id": "T1",
            "fullName": "Mild High Horses",
            "bench": null,
            "slogan": null,
            "shameRuns": null
        }))
        .unwrap();

        assert_eq!(team.id, "T1");
        assert!(team.bench.is_empty());
        assert!(team.slogan.is_empty());
        assert_eq!(team.shame_runs, 0);
        assert_eq!(team.championships, 0);
    }

    #[test]
    fn test_scalar_type_mismatch_fails() {
        let result = serde_json::from_value::<Team>(json!({"_id": "T1", "championships": "two"}));
        assert!(result.is_err());
    }
}
