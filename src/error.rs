//! Error types for surfspot

use thiserror::Error;

/// Main error type for surfspot operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Bridge error: {0}")]
    Bridge(String),

    #[error("Telegram API error: {0}")]
    Telegram(String),

    #[error("Forecast error: {0}")]
    Forecast(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for surfspot operations
pub type Result<T> = std::result::Result<T, Error>;
