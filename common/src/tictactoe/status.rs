use std::fmt;

use super::game_state::GameState;
use super::types::{COMPUTER_MARK, GameMode, GameResult, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Turn(Mark),
    ComputerThinking,
    Won { mark: Mark, by_computer: bool },
    Draw,
}

impl GameStatus {
    pub fn from_state(state: &GameState) -> Self {
        match state.result {
            Some(GameResult::Win { mark, .. }) => GameStatus::Won {
                mark,
                by_computer: state.mode == GameMode::VersusComputer && mark == COMPUTER_MARK,
            },
            Some(GameResult::Draw) => GameStatus::Draw,
            None if state.is_computer_turn() => GameStatus::ComputerThinking,
            None => GameStatus::Turn(state.current_mark),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Won { .. } | GameStatus::Draw)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Turn(mark) => write!(f, "Player {}'s turn", mark),
            GameStatus::ComputerThinking => write!(f, "Computer is thinking..."),
            GameStatus::Won { by_computer: true, .. } => write!(f, "Computer wins!"),
            GameStatus::Won { mark, .. } => write!(f, "Player {} wins!", mark),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_is_x_turn() {
        let status = GameStatus::from_state(&GameState::new(GameMode::LocalTwoPlayer));
        assert_eq!(status, GameStatus::Turn(Mark::X));
        assert_eq!(status.to_string(), "Player X's turn");
    }

    #[test]
    fn test_computer_turn_is_thinking() {
        let state = GameState::new(GameMode::VersusComputer).apply_move(4).unwrap();
        assert_eq!(GameStatus::from_state(&state), GameStatus::ComputerThinking);
    }

    #[test]
    fn test_local_o_turn() {
        let state = GameState::new(GameMode::LocalTwoPlayer).apply_move(4).unwrap();
        assert_eq!(GameStatus::from_state(&state).to_string(), "Player O's turn");
    }

    #[test]
    fn test_win_and_draw_text() {
        let mut state = GameState::new(GameMode::VersusComputer);
        for cell in [0, 3, 1, 4, 8, 5] {
            state = state.apply_move(cell).unwrap();
        }
        let status = GameStatus::from_state(&state);
        assert_eq!(status, GameStatus::Won { mark: Mark::O, by_computer: true });
        assert_eq!(status.to_string(), "Computer wins!");
        assert!(status.is_finished());

        let mut state = GameState::new(GameMode::LocalTwoPlayer);
        for cell in [0, 3, 1, 4, 8, 5] {
            state = state.apply_move(cell).unwrap();
        }
        assert_eq!(GameStatus::from_state(&state).to_string(), "Player O wins!");

        let mut state = GameState::new(GameMode::LocalTwoPlayer);
        for cell in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            state = state.apply_move(cell).unwrap();
        }
        assert_eq!(GameStatus::from_state(&state).to_string(), "It's a draw!");
    }
}
