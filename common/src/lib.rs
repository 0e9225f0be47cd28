pub mod config;
pub mod logger;
pub mod session;
pub mod tictactoe;

pub use logger::{LogLevel, init_logger};
