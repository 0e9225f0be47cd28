mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eframe::egui;
use tictactoe_common::tictactoe::GameMode;
use tictactoe_common::{init_logger, log};
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::{Config, get_config_manager};
use offline::spawn_local_game;
use state::SharedState;
use ui::TicTacToeApp;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Local,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Local => GameMode::LocalTwoPlayer,
            ModeArg::Computer => GameMode::VersusComputer,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client")]
#[command(about = "Tic Tac Toe for two players or against the computer", long_about = None)]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial play mode, overrides the config
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
}

fn load_config(path: Option<PathBuf>) -> (Config, Option<String>) {
    match get_config_manager(path).get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, config_error) = load_config(args.config);
    init_logger(config.log.prefix.clone(), config.log.level);
    if let Some(e) = config_error {
        log!("Failed to load config, using defaults: {}", e);
    }

    let initial_mode = args.mode.map(GameMode::from).unwrap_or(config.game.default_mode);
    log!("Starting in {:?} mode", initial_mode);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    spawn_local_game(config.game, initial_mode, shared_state.clone(), command_rx)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| {
            shared_state.set_context(cc.egui_ctx.clone());
            Ok(Box::new(TicTacToeApp::new(shared_state, command_sender)))
        }),
    )?;

    Ok(())
}
