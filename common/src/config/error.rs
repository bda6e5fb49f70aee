use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize: {0}")]
    Serialize(String),

    #[error("Failed to deserialize: {0}")]
    Deserialize(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
