use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

use super::{GameplayConfig, StorageConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ClientConfigManager {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub gameplay: GameplayConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub last_mode: Option<GameMode>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.gameplay.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
