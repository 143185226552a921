//! Update loop
//!
//! Single sequential consumer of the feed: pull a frame, decode it, then
//! merge league data into the entity store or hand game data to the
//! observer. Bad frames are logged and skipped; the loop only stops when the
//! transport does.

use blaseball_core::GameData;
use blaseball_store::{EntityStore, MergeReport};
use std::sync::Arc;

use crate::error::{DecodeError, TransportError};
use crate::messages::{Update, decode_update};
use crate::transport::FrameSource;

/// Receives every live game update, once each.
///
/// Called on the loop's task: a slow observer delays the next frame.
pub trait GameObserver: Send {
    fn on_game_update(&mut self, data: GameData);
}

impl<F> GameObserver for F
where
    F: FnMut(GameData) + Send,
{
    fn on_game_update(&mut self, data: GameData) {
        self(data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal: the transport has closed or failed
    Closed,
}

/// Counters kept by the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub league_updates: u64,
    pub game_updates: u64,
    pub unrecognized: u64,
    pub parse_failures: u64,
}

/// What happened to one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// League data merged into the store
    Merged(MergeReport),
    /// Game data handed to the observer
    Observed,
    /// Frame was unrecognized or failed to parse
    Skipped,
}

pub struct UpdateLoop<T, O>
where
    T: FrameSource,
    O: GameObserver,
{
    transport: T,
    store: Arc<EntityStore>,
    observer: O,
    state: LoopState,
    stats: LoopStats,
}

impl<T, O> UpdateLoop<T, O>
where
    T: FrameSource,
    O: GameObserver,
{
    pub fn new(transport: T, store: Arc<EntityStore>, observer: O) -> Self {
        Self {
            transport,
            store,
            observer,
            state: LoopState::Running,
            stats: LoopStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Decode and route one frame. Never fails: bad frames are skipped.
    pub fn handle_frame(&mut self, frame: &[u8]) -> Step {
        self.stats.frames += 1;

        match decode_update(frame) {
            Ok(Update::League(data)) => {
                let report = self.store.merge(data);
                self.stats.league_updates += 1;
                log::debug!(
                    "Merged league data: {} inserted, {} replaced",
                    report.inserted(),
                    report.replaced()
                );
                Step::Merged(report)
            }
            Ok(Update::Game(data)) => {
                self.stats.game_updates += 1;
                log::debug!("Game data update: {} games today", data.schedule.len());
                self.observer.on_game_update(data);
                Step::Observed
            }
            Err(DecodeError::UnrecognizedFrame) => {
                self.stats.unrecognized += 1;
                log::debug!("Skipping unrecognized frame: {}", preview(frame));
                Step::Skipped
            }
            Err(e) => {
                self.stats.parse_failures += 1;
                log::warn!("Skipping update: {}", e);
                Step::Skipped
            }
        }
    }

    /// Wait for the next frame and process it.
    ///
    /// Any transport error moves the loop to [`LoopState::Closed`]; later
    /// calls return [`TransportError::Closed`].
    pub async fn step(&mut self) -> Result<Step, TransportError> {
        if self.state == LoopState::Closed {
            return Err(TransportError::Closed);
        }

        match self.transport.next_frame().await {
            Ok(frame) => Ok(self.handle_frame(&frame)),
            Err(e) => {
                self.state = LoopState::Closed;
                if let Err(close_err) = self.transport.close().await {
                    log::debug!("Error while closing transport: {}", close_err);
                }
                Err(e)
            }
        }
    }

    /// Run until the transport closes.
    ///
    /// A closed transport is a normal exit and yields the final counters;
    /// any other transport error is returned as is.
    pub async fn run(mut self) -> Result<LoopStats, TransportError> {
        log::info!("Update loop started");
        loop {
            match self.step().await {
                Ok(_) => {}
                Err(e) if e.is_closed() => {
                    log::info!("Transport closed, update loop stopping");
                    return Ok(self.stats);
                }
                Err(e) => {
                    log::error!("Update loop failed: {}", e);
                    return Err(e);
                }
            }
        }
    }
}

fn preview(frame: &[u8]) -> String {
    const MAX: usize = 64;
    let text = String::from_utf8_lossy(&frame[..frame.len().min(MAX)]);
    if frame.len() > MAX {
        format!("{}... ({} bytes)", text, frame.len())
    } else {
        text.into_owned()
    }
}
