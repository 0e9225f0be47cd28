use super::board::Board;
use super::types::{GameResult, LINES, Line, Mark};

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.get(a)?;
        if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
            Some((mark, line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// `None` while the game continues.
pub fn evaluate(board: &Board) -> Option<GameResult> {
    if let Some((mark, line)) = check_win_with_line(board) {
        return Some(GameResult::Win { mark, line });
    }

    if board.is_full() {
        return Some(GameResult::Draw);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::parse_board;

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for index in line {
                board = board.with_mark(index, Mark::O);
            }
            assert_eq!(
                evaluate(&board),
                Some(GameResult::Win { mark: Mark::O, line }),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_win_reports_mark_and_line() {
        let board = parse_board("O__ XXX O__");
        assert_eq!(
            evaluate(&board),
            Some(GameResult::Win { mark: Mark::X, line: [3, 4, 5] })
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = parse_board("XOX OXO OXO");
        assert_eq!(evaluate(&board), Some(GameResult::Draw));
    }

    #[test]
    fn test_partial_board_without_line_continues() {
        let board = parse_board("XO_ _X_ __O");
        assert_eq!(evaluate(&board), None);
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = parse_board("XXX OOX OXO");
        assert_eq!(
            evaluate(&board),
            Some(GameResult::Win { mark: Mark::X, line: [0, 1, 2] })
        );
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Row 0 and column 0 are both complete; rows are scanned first.
        let board = parse_board("XXX XOO XOO");
        assert_eq!(check_win_with_line(&board), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = parse_board("XXO ___ ___");
        assert_eq!(check_win(&board), None);
    }
}
