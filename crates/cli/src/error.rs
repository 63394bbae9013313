use connectors::{config::SettingsError, error::AdapterError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to load connector settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
