//! Log output for received updates

use blaseball_core::GameData;
use blaseball_gateway::GameObserver;
use blaseball_store::EntityStore;

/// Observer that logs a one-line summary per game data update,
/// and one line per game at debug level
#[derive(Debug, Default)]
pub struct GameSummaryLogger {
    updates: u64,
}

impl GameSummaryLogger {
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl GameObserver for GameSummaryLogger {
    fn on_game_update(&mut self, data: GameData) {
        self.updates += 1;
        log::info!("{}", summary_line(&data));

        for game in &data.schedule {
            log::debug!(
                "  {} {} @ {} {} (inning {}, {})",
                game.away_team_nickname,
                game.away_score,
                game.home_team_nickname,
                game.home_score,
                game.inning,
                if game.game_complete { "final" } else { "live" }
            );
        }
    }
}

/// `GameData: season 3 day 42, 10 games (4 complete), 10 tomorrow`
pub fn summary_line(data: &GameData) -> String {
    let (season, day) = data
        .sim
        .as_ref()
        .map(|sim| (sim.season, sim.day))
        .unwrap_or_default();
    let complete = data.schedule.iter().filter(|g| g.game_complete).count();

    format!(
        "GameData: season {} day {}, {} games ({} complete), {} tomorrow",
        season,
        day,
        data.schedule.len(),
        complete,
        data.tomorrow_schedule.len()
    )
}

/// Log how many reference records the store holds
pub fn log_store_summary(store: &EntityStore) {
    let stats = store.stats();
    log::info!(
        "Store: {} teams, {} sub-leagues, {} divisions, {} leagues",
        stats.teams,
        stats.sub_leagues,
        stats.divisions,
        stats.leagues
    );
}
