use tictactoe_common::LogLevel;
use tictactoe_common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub prefix: Option<String>,
    #[serde(default)]
    pub level: LogLevel,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.prefix.as_deref().is_some_and(str::is_empty) {
            return Err("log prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}
