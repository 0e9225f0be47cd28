use std::thread::JoinHandle;

use tictactoe_common::log;
use tictactoe_common::session::{GameSettings, SessionCommand, run_session};
use tictactoe_common::tictactoe::GameMode;
use tokio::sync::mpsc;

use super::LocalBroadcaster;
use crate::state::SharedState;

async fn local_game_task(
    settings: GameSettings,
    initial_mode: GameMode,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    let broadcaster = LocalBroadcaster::new(shared_state);
    let scores = run_session(settings, initial_mode, command_rx, broadcaster).await;
    log!(
        "Final tally: X {} / O {} / draws {}",
        scores.x_wins,
        scores.o_wins,
        scores.draws
    );
}

/// Runs the session on its own single-threaded runtime. The thread ends when
/// every command sender has been dropped.
pub fn spawn_local_game(
    settings: GameSettings,
    initial_mode: GameMode,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) -> std::io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    std::thread::Builder::new()
        .name("tictactoe-session".to_string())
        .spawn(move || {
            runtime.block_on(local_game_task(settings, initial_mode, shared_state, command_rx));
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::tictactoe::{GameStatus, Mark};

    #[test]
    fn test_session_thread_processes_commands_and_exits() {
        let shared_state = SharedState::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let settings = GameSettings {
            computer_delay_ms: 0,
            default_mode: GameMode::LocalTwoPlayer,
        };

        let handle = spawn_local_game(settings, GameMode::LocalTwoPlayer, shared_state.clone(), rx)
            .unwrap();
        tx.send(SessionCommand::PlaceMark { cell: 4 }).unwrap();
        drop(tx);
        handle.join().unwrap();

        let snapshot = shared_state.get_snapshot().unwrap();
        assert_eq!(snapshot.state.board.get(4), Some(Mark::X));
        assert_eq!(snapshot.status, GameStatus::Turn(Mark::O));
    }
}
