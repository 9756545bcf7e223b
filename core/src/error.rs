//! Error types and handling for detbench Core

use thiserror::Error;

/// Result type alias for detbench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for detbench Core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Resolution was attempted from a parallel worker thread. The resolver
    /// reads session-wide override state and may only run on the main
    /// execution context.
    #[error("configuration cannot be resolved from a parallel worker thread")]
    InvalidContext,

    #[error("empty override key path: '{path}'")]
    EmptyKeyPath { path: String },

    #[error("override path '{path}' passes through non-record value at '{segment}'")]
    NotARecord { path: String, segment: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

impl Error {
    /// Whether this error is the worker-context precondition failure.
    pub fn is_invalid_context(&self) -> bool {
        matches!(self, Error::Config(ConfigError::InvalidContext))
    }
}
