mod division;
mod league;
mod sub_league;
mod team;

pub use division::Division;
pub use league::League;
pub use sub_league::SubLeague;
pub use team::{RosterSlot, Team};
