use super::board::Board;
use super::types::{CELL_COUNT, COMPUTER_MARK, GameMode, GameResult, Mark, MoveRejection};
use super::win_detector::evaluate;

/// One immutable snapshot of a game. Every accepted move produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub mode: GameMode,
    pub result: Option<GameResult>,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            result: None,
            last_move: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.result.is_none()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VersusComputer
            && self.is_active()
            && self.current_mark == COMPUTER_MARK
    }

    pub fn apply_move(&self, cell: usize) -> Result<GameState, MoveRejection> {
        if !self.is_active() {
            return Err(MoveRejection::GameOver);
        }

        if cell >= CELL_COUNT {
            return Err(MoveRejection::OutOfBounds(cell));
        }

        if !self.board.is_empty_cell(cell) {
            return Err(MoveRejection::CellOccupied(cell));
        }

        let board = self.board.with_mark(cell, self.current_mark);

        Ok(GameState {
            board,
            current_mark: self.current_mark.opponent(),
            mode: self.mode,
            result: evaluate(&board),
            last_move: Some(cell),
        })
    }

    /// Same as [`GameState::apply_move`], but refuses input while the computer is to move.
    pub fn apply_human_move(&self, cell: usize) -> Result<GameState, MoveRejection> {
        if self.is_computer_turn() {
            return Err(MoveRejection::NotYourTurn);
        }
        self.apply_move(cell)
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.result.and_then(|result| result.winning_line())
    }
}
