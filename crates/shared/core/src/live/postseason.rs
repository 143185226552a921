use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Postseason bracket.
///
/// The shape of `playoffs` is undocumented upstream, so it is kept as raw JSON
/// and re-serialized exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSeason {
    pub playoffs: Value,
}
