//! Error types for the meteo gateway

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the meteo gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Chat channel error
    #[error("channel error: {0}")]
    Channel(String),

    /// Weather provider error
    #[error("weather error: {0}")]
    Weather(String),

    /// Speech-to-text error
    #[error("STT error: {0}")]
    Stt(String),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
