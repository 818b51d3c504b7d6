//! Error types for tubesum.

use thiserror::Error;

/// Library-level error type for tubesum operations.
#[derive(Error, Debug)]
pub enum TubesumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Transcript(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for tubesum operations.
pub type Result<T> = std::result::Result<T, TubesumError>;
