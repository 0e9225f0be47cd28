use tictactoe_common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_SIDE: f32 = 200.0;
pub const MAX_WINDOW_SIDE: f32 = 2000.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_WINDOW_SIDE..=MAX_WINDOW_SIDE).contains(&value) {
                return Err(format!(
                    "Window {} must be between {} and {}, got {}",
                    name, MIN_WINDOW_SIDE, MAX_WINDOW_SIDE, value
                ));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}
