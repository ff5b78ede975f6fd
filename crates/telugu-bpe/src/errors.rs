//! # Error Types

use std::path::PathBuf;

/// Errors from telugu-bpe operations.
#[derive(Debug, thiserror::Error)]
pub enum TeluguBpeError {
    /// The input text was blank, or whitespace only.
    #[error("empty input: please provide some Telugu text")]
    EmptyInput,

    /// The model source does not exist.
    #[error("model not found: {}", path.display())]
    ModelNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The model payload could not be parsed into a model.
    #[error("model format error: {0}")]
    ModelFormat(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TeluguBpeError {
    /// Classify a `serde_json` error raised while reading or writing a model.
    ///
    /// Errors raised by the underlying reader/writer stay I/O errors;
    /// everything else is a format error.
    pub fn from_json_error(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::ModelFormat(err.to_string())
        }
    }
}

/// Result type for telugu-bpe operations.
pub type TBResult<T> = core::result::Result<T, TeluguBpeError>;
