//! Parser errors.

use super::error_code::{self, LogweaveErrorCode};

/// Errors that can occur while parsing Java source.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Tree-sitter grammar could not be loaded: {message}")]
    Grammar { message: String },

    #[error("Tree-sitter produced no tree: {message}")]
    Failed { message: String },
}

impl LogweaveErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
