mod game;
mod postseason;
mod season;
mod sim;
mod standings;

pub use game::Game;
pub use postseason::PostSeason;
pub use season::Season;
pub use sim::Sim;
pub use standings::Standings;
