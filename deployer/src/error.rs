//! Deployer-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployerError {
    #[error("Cannot resolve descriptor '{input}': {reason}")]
    ResolutionError { input: String, reason: String },

    #[error("Invalid document base URL '{input}': {reason}")]
    InvalidBaseUrl { input: String, reason: String },

    #[error("Extra parameter '{key}' collides with a reserved parameter")]
    ReservedParameter { key: String },

    #[error("Launch call could not be emitted: {message}")]
    LaunchFailed { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DeployerError {
    pub fn resolution(input: &str, reason: impl ToString) -> Self {
        Self::ResolutionError {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_base(input: &str, reason: impl ToString) -> Self {
        Self::InvalidBaseUrl {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn launch(message: impl ToString) -> Self {
        Self::LaunchFailed {
            message: message.to_string(),
        }
    }
}

pub type DeployerResult<T> = Result<T, DeployerError>;
