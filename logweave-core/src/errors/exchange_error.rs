//! Framework exchange errors.

use super::error_code::{self, LogweaveErrorCode};
use super::RenderError;

/// Errors raised by the framework exchange engine.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// No recognizable logging convention in the file's imports. The
    /// exchange never guesses.
    #[error("No recognizable logging convention detected")]
    DetectionFailed,

    #[error("No conventionally named logger field found")]
    NoLoggerField,

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl LogweaveErrorCode for ExchangeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DetectionFailed => error_code::DETECTION_FAILED,
            Self::Render(e) => e.error_code(),
            _ => error_code::EXCHANGE_ERROR,
        }
    }
}
