use std::time::Duration;

use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MAX_COMPUTER_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameplayConfig {
    pub computer_delay_ms: u64,
}

impl GameplayConfig {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Validate for GameplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "Computer delay must be at most {} ms, got {}",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
        }
    }
}
