//! Error types for the taskop client

use thiserror::Error;

/// Result type alias for taskop operations
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
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not logged in. Run `taskop login` first")]
    NotLoggedIn,

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 401. The local session has already been cleared.
    #[error("Authentication failed")]
    Unauthorized,

    /// Any other non-2xx answer. `message` is the server's `message` field
    /// when the body carried one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build a status error, falling back to the generic HTTP message.
    pub fn status(status: u16, message: Option<String>) -> Self {
        ApiError::Status {
            status,
            message: message.unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
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

/// Session store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read session store {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to write session store {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Session store lock poisoned")]
    Poisoned,
}
