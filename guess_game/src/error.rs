use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid range: low ({low}) must not be greater than high ({high})")]
    InvalidRange { low: i64, high: i64 },

    #[error("max attempts must be at least 1")]
    NoAttempts,

    #[error("invalid value '{value}' for --{name}")]
    InvalidArgument { name: &'static str, value: String },

    /// The input stream ended before the session reached Won or Exhausted.
    #[error("input ended at guess #{attempt} of {max_attempts} before the game finished")]
    InputExhausted { attempt: u32, max_attempts: u32 },

    #[error("the session is already finished")]
    SessionFinished,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
