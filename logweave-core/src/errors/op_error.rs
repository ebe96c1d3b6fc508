//! Logging operation errors.

use super::error_code::{self, LogweaveErrorCode};
use super::{ParseError, RenderError};

/// Errors raised by logging operations. Ambiguous-input variants abort the
/// operation before any edit is produced.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    #[error("No enclosing method at offset {offset}")]
    NoEnclosingMethod { offset: usize },

    #[error("No enclosing type at offset {offset}")]
    NoEnclosingType { offset: usize },

    #[error("No variable resolvable at offset {offset}")]
    NoVariableAtCursor { offset: usize },

    #[error("Offset {offset} is not a valid insert position")]
    InvalidInsertPosition { offset: usize },

    #[error("Edit batch contains overlapping ranges")]
    OverlappingEdits,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LogweaveErrorCode for OpError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OverlappingEdits => error_code::EDIT_CONFLICT,
            Self::Render(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            _ => error_code::AMBIGUOUS_SELECTION,
        }
    }
}
