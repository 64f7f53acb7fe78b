//! Error type shared by the library.

use thiserror::Error;

/// Everything that can stop a game early.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a prompt was still waiting for an answer.
    #[error("input closed while waiting for an answer to {prompt:?}")]
    InputClosed { prompt: String },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
