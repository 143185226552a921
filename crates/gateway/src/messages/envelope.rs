//! Socket.IO event envelope
//!
//! Every update arrives as one text frame shaped like
//! `42["<event name>",<json payload>]`: the Engine.IO message type (`4`),
//! the Socket.IO event packet type (`2`), then a JSON array holding the event
//! name and its payload. The payload is never parsed here; the envelope is
//! peeled off by exact prefix/suffix matching and the body is handed on as
//! raw bytes.

use std::fmt;

use crate::error::DecodeError;

/// Engine.IO message + Socket.IO event packet, plus the opening bracket
pub const EVENT_FRAME_PREFIX: &[u8] = b"42[";

const LEAGUE_EVENT_PREFIX: &[u8] = br#""leagueDataUpdate","#;
const GAME_EVENT_PREFIX: &[u8] = br#""gameDataUpdate","#;
const FRAME_SUFFIX: &[u8] = b"]";

/// Which feed event a frame carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    /// Reference data: teams, sub-leagues, divisions, leagues
    League,
    /// Live game state
    Game,
}

impl UpdateKind {
    /// Event name as it appears on the wire (without quotes)
    pub fn event_name(&self) -> &'static str {
        match self {
            UpdateKind::League => "leagueDataUpdate",
            UpdateKind::Game => "gameDataUpdate",
        }
    }

    fn prefix(&self) -> &'static [u8] {
        match self {
            UpdateKind::League => LEAGUE_EVENT_PREFIX,
            UpdateKind::Game => GAME_EVENT_PREFIX,
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// A recognized frame: the update kind and the raw JSON body, borrowed
/// from the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub kind: UpdateKind,
    pub body: &'a [u8],
}

/// Strip the envelope from a raw frame.
///
/// Fails with [`DecodeError::UnrecognizedFrame`] unless the frame starts with
/// `42[`, is immediately followed by one of the two known event names and a
/// comma, and ends with a single `]`.
pub fn decode(frame: &[u8]) -> Result<Envelope<'_>, DecodeError> {
    let rest = strip_exact_prefix(frame, EVENT_FRAME_PREFIX).ok_or(DecodeError::UnrecognizedFrame)?;

    let (kind, rest) = [UpdateKind::League, UpdateKind::Game]
        .into_iter()
        .find_map(|kind| strip_exact_prefix(rest, kind.prefix()).map(|body| (kind, body)))
        .ok_or(DecodeError::UnrecognizedFrame)?;

    let body = rest
        .strip_suffix(FRAME_SUFFIX)
        .ok_or(DecodeError::UnrecognizedFrame)?;

    Ok(Envelope { kind, body })
}

/// Wrap a JSON body in the envelope for the given kind
pub fn encode(kind: UpdateKind, body: &[u8]) -> Vec<u8> {
    let prefix = kind.prefix();
    let capacity = EVENT_FRAME_PREFIX.len() + prefix.len() + body.len() + FRAME_SUFFIX.len();
    let mut frame = Vec::with_capacity(capacity);
    frame.extend_from_slice(EVENT_FRAME_PREFIX);
    frame.extend_from_slice(prefix);
    frame.extend_from_slice(body);
    frame.extend_from_slice(FRAME_SUFFIX);
    frame
}

/// Remove `prefix` only if it sits at the very start of `input`, checking
/// that exactly `prefix.len()` bytes were consumed.
fn strip_exact_prefix<'a>(input: &'a [u8], prefix: &[u8]) -> Option<&'a [u8]> {
    let rest = input.strip_prefix(prefix)?;
    (rest.len() + prefix.len() == input.len()).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_league_frame() {
        let frame = br#"42["leagueDataUpdate",{"teams":[]}]"#;
        let envelope = decode(frame).unwrap();
        assert_eq!(envelope.kind, UpdateKind::League);
        assert_eq!(envelope.body, br#"{"teams":[]}"#);
    }

    #[test]
    fn test_decode_game_frame() {
        let frame = br#"42["gameDataUpdate",{"schedule":[]}]"#;
        let envelope = decode(frame).unwrap();
        assert_eq!(envelope.kind, UpdateKind::Game);
        assert_eq!(envelope.body, br#"{"schedule":[]}"#);
    }

    #[test]
    fn test_missing_event_prefix_is_unrecognized() {
        for frame in [
            &b""[..],
            b"0{\"sid\":\"abc\",\"pingInterval\":25000}",
            b"40",
            b"3",
            b"43[\"leagueDataUpdate\",{}]",
            b" 42[\"leagueDataUpdate\",{}]",
            b"[\"leagueDataUpdate\",{}]",
        ] {
            assert!(
                matches!(decode(frame), Err(DecodeError::UnrecognizedFrame)),
                "frame {:?} should be unrecognized",
                String::from_utf8_lossy(frame)
            );
        }
    }

    #[test]
    fn test_unknown_event_name_is_unrecognized() {
        for frame in [
            &br#"42["playerDataUpdate",{}]"#[..],
            br#"42["leagueDataUpdate"{}]"#,
            br#"42[ "gameDataUpdate",{}]"#,
            br#"42["GameDataUpdate",{}]"#,
            br#"42[{}]"#,
        ] {
            assert!(matches!(decode(frame), Err(DecodeError::UnrecognizedFrame)));
        }
    }

    #[test]
    fn test_event_name_elsewhere_does_not_match() {
        let frame = br#"42["otherEvent",{"note":"leagueDataUpdate","x":"gameDataUpdate",}]"#;
        assert!(matches!(decode(frame), Err(DecodeError::UnrecognizedFrame)));
    }

    #[test]
    fn test_missing_closing_bracket_is_unrecognized() {
        let frame = br#"42["gameDataUpdate",{}"#;
        assert!(matches!(decode(frame), Err(DecodeError::UnrecognizedFrame)));
    }

    #[test]
    fn test_only_one_closing_bracket_is_stripped() {
        let frame = br#"42["leagueDataUpdate",[1]]"#;
        let envelope = decode(frame).unwrap();
        assert_eq!(envelope.body, b"[1]");
    }

    #[test]
    fn test_encode_matches_wire_format() {
        let frame = encode(UpdateKind::Game, br#"{"a":1}"#);
        assert_eq!(frame, br#"42["gameDataUpdate",{"a":1}]"#.to_vec());

        let envelope = decode(&frame).unwrap();
        assert_eq!(envelope.kind, UpdateKind::Game);
        assert_eq!(envelope.body, br#"{"a":1}"#);
    }
}
