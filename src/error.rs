//! Error type shared by the whole crate.

use thiserror::Error as ThisError;

/// Failures raised by route optimization.
///
/// Degraded output (fewer alternatives than requested) is never an error;
/// only malformed input, rejected options, or an empty result are.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("no valid routes found")]
    NoValidRoute,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }
}
