//! Error types for page rendering and serving

use thiserror::Error;

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, rendering or serving the page
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Embed geometry that cannot produce a visible window
    #[error("Invalid embed geometry: {0}")]
    InvalidGeometry(String),

    /// Failed to read a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to bind or run the HTTP listener
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
