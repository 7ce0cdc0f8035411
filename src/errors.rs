use cashflow_config::ConfigError;
use cashflow_core::CoreError;
use thiserror::Error;

/// Error type shared by scenario loading, configuration and the CLI.
#[derive(Debug, Error)]
pub enum CashflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Usage(String),
}
