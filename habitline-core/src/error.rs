//! Error types for habitline-core

use thiserror::Error;

/// Main error type for the habitline-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized habit frequency value.
    ///
    /// Frequency strings are rejected rather than silently defaulted;
    /// callers translate this into their own error surface.
    #[error("unknown frequency: {0}")]
    UnknownFrequency(String),

    /// Unrecognized habit category value
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Display color outside the `#RRGGBB` format
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Habit field failed shape validation
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for habitline-core
pub type Result<T> = std::result::Result<T, Error>;
