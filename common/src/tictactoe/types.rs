use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// The computer always plays the second mark.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    LocalTwoPlayer,
    VersusComputer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::LocalTwoPlayer => "Two players",
            GameMode::VersusComputer => "Versus computer",
        }
    }
}

/// Three board indices that win when uniformly marked.
pub type Line = [usize; 3];

/// Rows, then columns, then diagonals. Evaluation scans in this order.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win { mark: Mark, line: Line },
    Draw,
}

impl GameResult {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            GameResult::Draw => None,
        }
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameResult::Win { line, .. } => Some(*line),
            GameResult::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    OutOfBounds(usize),
    CellOccupied(usize),
    NotYourTurn,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "Game is already over"),
            MoveRejection::OutOfBounds(cell) => write!(f, "Cell {} is out of bounds", cell),
            MoveRejection::CellOccupied(cell) => write!(f, "Cell {} is already marked", cell),
            MoveRejection::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for MoveRejection {}
