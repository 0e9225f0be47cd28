use eframe::egui;
use tictactoe_common::session::{ScoreBoard, SessionCommand, SessionSnapshot};
use tictactoe_common::tictactoe::GameMode;

use super::board::BoardUi;
use crate::command_sender::CommandSender;
use crate::state::SharedState;

const CELL_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    board_ui: BoardUi,
}

impl TicTacToeApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender) -> Self {
        Self {
            shared_state,
            command_sender,
            board_ui: BoardUi::new(),
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        ui.horizontal(|ui| {
            let mut mode = snapshot.state.mode;
            ui.label("Mode:");
            ui.radio_value(&mut mode, GameMode::LocalTwoPlayer, GameMode::LocalTwoPlayer.label());
            ui.radio_value(&mut mode, GameMode::VersusComputer, GameMode::VersusComputer.label());
            if mode != snapshot.state.mode {
                self.command_sender.send(SessionCommand::SetMode { mode });
            }

            ui.separator();

            if ui.button("🔄 Restart (R)").clicked() {
                self.command_sender.send(SessionCommand::Restart);
            }
        });
    }

    fn render_status(&self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        let text = snapshot.status.to_string();
        if snapshot.status.is_finished() {
            ui.colored_label(egui::Color32::DARK_GREEN, egui::RichText::new(text).heading());
        } else {
            ui.heading(text);
        }
    }

    fn handle_keyboard(&self, ctx: &egui::Context) {
        let (cell, restart) = ctx.input(|i| {
            let cell = CELL_KEYS.iter().position(|&key| i.key_pressed(key));
            (cell, i.key_pressed(egui::Key::R))
        });

        if let Some(cell) = cell {
            self.command_sender.send(SessionCommand::PlaceMark { cell });
        }
        if restart {
            self.command_sender.send(SessionCommand::Restart);
        }
    }
}

pub fn score_line(scores: &ScoreBoard, mode: GameMode) -> String {
    match mode {
        GameMode::LocalTwoPlayer => format!(
            "X: {}   O: {}   Draws: {}",
            scores.x_wins, scores.o_wins, scores.draws
        ),
        // The human always plays X against the computer.
        GameMode::VersusComputer => format!(
            "You: {}   Computer: {}   Draws: {}",
            scores.x_wins, scores.o_wins, scores.draws
        ),
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let Some(snapshot) = self.shared_state.get_snapshot() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            });
            ctx.request_repaint();
            return;
        };

        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui, &snapshot);
        });

        egui::TopBottomPanel::bottom("scores").show(ctx, |ui| {
            ui.label(score_line(&snapshot.scores, snapshot.state.mode));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_status(ui, &snapshot);
                ui.add_space(8.0);
                if let Some(cell) = self.board_ui.render(ui, &snapshot.state) {
                    self.command_sender.send(SessionCommand::PlaceMark { cell });
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line_local() {
        let scores = ScoreBoard { x_wins: 2, o_wins: 1, draws: 3 };
        assert_eq!(score_line(&scores, GameMode::LocalTwoPlayer), "X: 2   O: 1   Draws: 3");
    }

    #[test]
    fn test_score_line_versus_computer() {
        let scores = ScoreBoard { x_wins: 0, o_wins: 4, draws: 1 };
        assert_eq!(
            score_line(&scores, GameMode::VersusComputer),
            "You: 0   Computer: 4   Draws: 1"
        );
    }
}
