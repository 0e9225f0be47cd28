mod client_config;
mod log_config;
mod window_config;

pub use client_config::{Config, get_config_manager};
pub use log_config::LogConfig;
pub use window_config::WindowConfig;
