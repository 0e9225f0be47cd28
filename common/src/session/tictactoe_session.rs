use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Sleep;

use crate::session::{GameSettings, ScoreBoard, SessionBroadcaster, SessionCommand, SessionSnapshot};
use crate::tictactoe::{BotInput, GameMode, GameState, calculate_move};
use crate::{debug_log, log};

/// A computer move waiting out its delay. Dropping it cancels the move.
struct PendingMove {
    sleep: Pin<Box<Sleep>>,
    generation: u64,
}

struct Session {
    state: GameState,
    scores: ScoreBoard,
    generation: u64,
    computer_delay: Duration,
}

impl Session {
    fn new(mode: GameMode, computer_delay: Duration) -> Self {
        Self {
            state: GameState::new(mode),
            scores: ScoreBoard::default(),
            generation: 0,
            computer_delay,
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.state, self.scores)
    }

    fn reset(&mut self, mode: GameMode) {
        if mode != self.state.mode {
            self.scores = ScoreBoard::default();
        }
        self.state = GameState::new(mode);
        self.generation += 1;
        log!("New game, mode: {:?}", mode);
    }

    fn advance(&mut self, next: GameState) {
        self.state = next;
        if let Some(result) = next.result {
            self.scores.record(result);
            log!("Game over: {:?}", result);
        }
    }

    fn schedule_computer_move(&self) -> Option<PendingMove> {
        if !self.state.is_computer_turn() {
            return None;
        }
        Some(PendingMove {
            sleep: Box::pin(tokio::time::sleep(self.computer_delay)),
            generation: self.generation,
        })
    }

    /// Returns `true` when the state changed.
    fn handle_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::PlaceMark { cell } => match self.state.apply_human_move(cell) {
                Ok(next) => {
                    debug_log!("{} placed at {}", self.state.current_mark, cell);
                    self.advance(next);
                    true
                }
                Err(rejection) => {
                    debug_log!("Ignored move at {}: {}", cell, rejection);
                    false
                }
            },
            SessionCommand::SetMode { mode } => {
                self.reset(mode);
                true
            }
            SessionCommand::Restart => {
                self.reset(self.state.mode);
                true
            }
        }
    }

    fn play_computer_turn(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.state.is_computer_turn() {
            debug_log!("Dropped stale computer move from generation {}", generation);
            return false;
        }

        let Some(cell) = calculate_move(BotInput::from_game_state(&self.state)) else {
            return false;
        };

        match self.state.apply_move(cell) {
            Ok(next) => {
                debug_log!("Computer placed {} at {}", self.state.current_mark, cell);
                self.advance(next);
                true
            }
            Err(rejection) => {
                log!("Computer move at {} rejected: {}", cell, rejection);
                false
            }
        }
    }
}

async fn wait_for_pending(pending: &mut Option<PendingMove>) -> u64 {
    match pending {
        Some(pending_move) => {
            pending_move.sleep.as_mut().await;
            pending_move.generation
        }
        None => std::future::pending().await,
    }
}

/// Drives one game session until the command channel closes.
///
/// Every state change is published through `broadcaster`. In computer mode the
/// computer's reply is applied after `settings.computer_delay()`; a restart or
/// mode change during that delay cancels it.
pub async fn run_session<B: SessionBroadcaster>(
    settings: GameSettings,
    initial_mode: GameMode,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: B,
) -> ScoreBoard {
    let mut session = Session::new(initial_mode, settings.computer_delay());
    let mut pending: Option<PendingMove> = None;

    broadcaster.broadcast_state(session.snapshot()).await;

    loop {
        let changed = tokio::select! {
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                session.handle_command(command)
            }
            generation = wait_for_pending(&mut pending) => {
                pending = None;
                session.play_computer_turn(generation)
            }
        };

        if !changed {
            continue;
        }

        // A fresh generation or a finished game invalidates whatever was queued.
        if pending
            .as_ref()
            .is_some_and(|p| p.generation != session.generation || !session.state.is_computer_turn())
        {
            pending = None;
        }
        if pending.is_none() {
            pending = session.schedule_computer_move();
        }

        broadcaster.broadcast_state(session.snapshot()).await;
    }

    log!(
        "Session closed after {} games",
        session.scores.games_played()
    );
    session.scores
}
