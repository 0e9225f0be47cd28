use eframe::egui;
use tictactoe_common::tictactoe::{BOARD_SIZE, CELL_COUNT, GameState, Mark};

pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const BOARD_PADDING: f32 = 20.0;
    const MIN_CELL_SIZE: f32 = 50.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = (available_width.min(available_height) - Self::BOARD_PADDING * 2.0)
            / BOARD_SIZE as f32;
        side.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Draws the grid and returns the cell the user clicked, if any.
    pub fn render(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());
        let response = response.on_hover_text("Click a cell or press 1-9");

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(line) = state.winning_line() {
            for index in line {
                painter.rect_filled(
                    cell_rect(rect, cell_size, index),
                    0.0,
                    egui::Color32::from_rgb(170, 230, 170),
                );
            }
        }

        let accepts_input = state.is_active() && !state.is_computer_turn();
        self.last_hover = response
            .hover_pos()
            .filter(|_| accepts_input)
            .and_then(|pos| cell_at(rect, cell_size, pos))
            .filter(|&index| state.board.is_empty_cell(index));

        if let Some(index) = self.last_hover {
            painter.rect_filled(
                cell_rect(rect, cell_size, index),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        for index in 0..CELL_COUNT {
            match state.board.get(index) {
                Some(Mark::X) => draw_x(painter, cell_rect(rect, cell_size, index)),
                Some(Mark::O) => draw_o(painter, cell_rect(rect, cell_size, index)),
                None => {}
            }
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }
}

fn cell_rect(board: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
    let (row, col) = (index / BOARD_SIZE, index % BOARD_SIZE);
    egui::Rect::from_min_size(
        egui::pos2(
            board.left() + col as f32 * cell_size,
            board.top() + row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn cell_at(board: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
    if !board.contains(pos) {
        return None;
    }
    let col = (((pos.x - board.left()) / cell_size) as usize).min(BOARD_SIZE - 1);
    let row = (((pos.y - board.top()) / cell_size) as usize).min(BOARD_SIZE - 1);
    Some(row * BOARD_SIZE + col)
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = rect.width() / 2.0 - padding;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));
    painter.circle_stroke(rect.center(), radius, stroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_maps_row_major() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, 100.0, egui::pos2(15.0, 15.0)), Some(0));
        assert_eq!(cell_at(rect, 100.0, egui::pos2(160.0, 160.0)), Some(4));
        assert_eq!(cell_at(rect, 100.0, egui::pos2(305.0, 120.0)), Some(5));
        assert_eq!(cell_at(rect, 100.0, egui::pos2(20.0, 250.0)), Some(6));
    }

    #[test]
    fn test_cell_at_outside_board() {
        assert_eq!(cell_at(board_rect(), 100.0, egui::pos2(5.0, 50.0)), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let rect = board_rect();
        for index in 0..CELL_COUNT {
            let center = cell_rect(rect, 100.0, index).center();
            assert_eq!(cell_at(rect, 100.0, center), Some(index));
        }
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(BoardUi::calculate_cell_size(100.0, 100.0), BoardUi::MIN_CELL_SIZE);
        assert_eq!(BoardUi::calculate_cell_size(2000.0, 2000.0), BoardUi::MAX_CELL_SIZE);
    }
}
