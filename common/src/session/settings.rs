use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::tictactoe::GameMode;

pub const MAX_COMPUTER_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameSettings {
    pub computer_delay_ms: u64,
    pub default_mode: GameMode,
}

impl GameSettings {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}, got {}",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
            default_mode: GameMode::VersusComputer,
        }
    }
}
