use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Identity key of a team (`_id` on the wire)
pub type TeamId = String;

/// Identity key of a player. Opaque: nothing in the client resolves it.
pub type PlayerId = String;

/// Identity key of a division
pub type DivisionId = String;

/// Identity key of a sub-league
pub type SubLeagueId = String;

/// Identity key of a league
pub type LeagueId = String;

/// Identity key of a single game
pub type GameId = String;

/// Deserialize a field that the feed sometimes sends as `null`,
/// falling back to the type's default in that case.
///
/// Combine with `#[serde(default)]` so a missing field behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "null_as_default")]
        ids: Vec<String>,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let null: Holder = serde_json::from_str(r#"{"ids": null}"#).unwrap();
        assert!(null.ids.is_empty());

        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(missing.ids.is_empty());

        let present: Holder = serde_json::from_str(r#"{"ids": ["a", "b"]}"#).unwrap();
        assert_eq!(present.ids, vec!["a", "b"]);
    }

    #[test]
    fn test_type_mismatch_still_fails() {
        let result = serde_json::from_str::<Holder>(r#"{"ids": 7}"#);
        assert!(result.is_err());
    }
}
