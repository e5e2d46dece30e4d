mod observability;
mod storage;

use crate::storage::StorageError;
use thiserror::Error;

pub use observability::init_tracing;
pub use storage::init_storage;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Environment variable not set: {0}")]
    FailedToLoadEnvVar(&'static str),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Unsupported storage url scheme: {0}")]
    UnsupportedStorage(String),

    #[error("Failed to open storage")]
    OpenStorage(#[source] StorageError),

    #[error("Failed to create schema")]
    CreateSchema(#[source] StorageError),

    #[error("Failed to load configs")]
    LoadConfig(#[from] config::ConfigError),

    #[error("Failed to init log bridge")]
    InitLogTracer(#[from] tracing_log::log::SetLoggerError),

    #[error("Failed to set global tracing subscriber")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}
