use super::types::{CELL_COUNT, Mark};

/// Row-major 3x3 grid. Placing a mark yields a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index] = Some(mark);
        Self { cells }
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
pub(crate) fn parse_board(layout: &str) -> Board {
    let mut cells = [None; CELL_COUNT];
    let symbols = layout.chars().filter(|c| !c.is_whitespace());
    for (index, symbol) in symbols.enumerate() {
        cells[index] = match symbol {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Mark::X));
    }

    #[test]
    fn test_available_moves_ascending() {
        let board = parse_board("X_O _X_ __O");
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_out_of_range_cell_is_not_empty() {
        let board = Board::new();
        assert!(!board.is_empty_cell(9));
        assert_eq!(board.get(9), None);
    }
}
