//! Admin error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::entity::EntityError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Entity(#[from] EntityError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
