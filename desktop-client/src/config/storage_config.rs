use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub location: String,
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.is_empty() {
            return Err("storage location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            location: "tictactoe_state".to_string(),
        }
    }
}
