use thiserror::Error;

use crate::config::ConfigError;
use crate::mcp::{FailureKind, RegistryError};

pub type Result<T> = std::result::Result<T, HelloError>;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tool registration error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid arguments: {0}")]
    Arguments(String),

    #[error("Tool call failed ({kind}): {message}")]
    CallFailed { kind: FailureKind, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod commands;
pub mod config;
pub mod mcp;
