mod settings;
mod tictactoe_session;

use std::future::Future;

use crate::tictactoe::{GameMode, GameResult, GameState, GameStatus, Mark};

pub use settings::{GameSettings, MAX_COMPUTER_DELAY_MS};
pub use tictactoe_session::run_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    PlaceMark { cell: usize },
    SetMode { mode: GameMode },
    Restart,
}

/// Results of finished games since the mode was last chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win { mark: Mark::X, .. } => self.x_wins += 1,
            GameResult::Win { mark: Mark::O, .. } => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub status: GameStatus,
    pub scores: ScoreBoard,
}

impl SessionSnapshot {
    pub fn new(state: GameState, scores: ScoreBoard) -> Self {
        Self {
            state,
            status: GameStatus::from_state(&state),
            scores,
        }
    }
}

pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;
}
