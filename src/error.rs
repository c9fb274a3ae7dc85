//! Error types for the UASD portal CLI

use thiserror::Error;

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// API-related errors, one per failing request outcome
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("You are not logged in.")]
    Unauthenticated,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Could not reach the server: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Whether the server refused the stored token (401 / 403)
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ApiError::Unauthenticated => true,
            ApiError::Rejected { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}

/// Credential persistence errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Credential storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential storage lock poisoned")]
    Poisoned,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
