//! Shared error types for the applet deployment tooling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SharedError {
    pub fn invalid(field: &str, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::MissingConfig {
            field: field.to_string(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
