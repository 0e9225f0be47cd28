use super::board::{Board, get_available_moves};
use super::game_state::GameState;
use super::types::{CENTER, CORNERS, Mark};
use super::win_detector::check_win;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

pub fn calculate_move(input: BotInput) -> Option<usize> {
    select_move(&input.board, input.bot_mark, input.bot_mark.opponent())
}

/// Fixed-priority choice: win, block, center, corner, first empty.
pub fn select_move(board: &Board, own_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    let available_moves = get_available_moves(board);

    if available_moves.is_empty() {
        return None;
    }

    if let Some(cell) = find_winning_move(board, own_mark, &available_moves) {
        return Some(cell);
    }

    if let Some(cell) = find_winning_move(board, opponent_mark, &available_moves) {
        return Some(cell);
    }

    if board.is_empty_cell(CENTER) {
        return Some(CENTER);
    }

    if let Some(&corner) = CORNERS.iter().find(|&&corner| board.is_empty_cell(corner)) {
        return Some(corner);
    }

    available_moves.first().copied()
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&cell| check_win(&board.with_mark(cell, mark)) == Some(mark))
}
