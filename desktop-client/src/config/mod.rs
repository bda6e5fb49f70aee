mod gameplay_config;
mod main_config;
mod storage_config;

pub use gameplay_config::GameplayConfig;
pub use main_config::{get_config_manager, ClientConfigManager, Config};
pub use storage_config::StorageConfig;
