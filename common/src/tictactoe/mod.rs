mod board;
mod bot_controller;
mod game_state;
mod status;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, calculate_move, select_move};
pub use game_state::GameState;
pub use status::GameStatus;
pub use types::{
    BOARD_SIZE, CELL_COUNT, COMPUTER_MARK, GameMode, GameResult, LINES, Line, Mark, MoveRejection,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
