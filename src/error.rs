//! Error types for Sikt.

use thiserror::Error;

/// Library-level error type for Sikt operations.
#[derive(Error, Debug)]
pub enum SiktError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("YouTube API error: {0}")]
    YouTube(String),

    #[error("Description generation failed: {0}")]
    Describe(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Sikt operations.
pub type Result<T> = std::result::Result<T, SiktError>;
