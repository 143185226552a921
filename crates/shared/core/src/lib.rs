//! Blaseball Core Domain
//!
//! Pure data types for the Blaseball feed client: reference entities
//! (teams, sub-leagues, divisions, leagues), live game state, and the two
//! payload records the feed delivers.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod live;
pub mod snapshot;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Division, League, RosterSlot, SubLeague, Team};
pub use live::{Game, PostSeason, Season, Sim, Standings};
pub use snapshot::{GameData, LeagueData};
pub use values::{
    DivisionId, GameId, LeagueId, PlayerId, SubLeagueId, TeamId, Timestamp, null_as_default,
};
