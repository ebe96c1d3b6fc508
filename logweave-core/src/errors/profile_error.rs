//! Profile store errors.

use super::error_code::{self, LogweaveErrorCode};

/// Errors raised by the profile store.
///
/// Malformed *values* inside a persisted profile are not errors — they decode
/// to type-specific fallbacks. These variants cover store misuse and broken
/// persistence containers.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Built-in profile '{title}' cannot be modified or removed")]
    BuiltInImmutable { title: String },

    #[error("A profile titled '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("No profile named '{name}'")]
    UnknownProfile { name: String },

    #[error("Profile store I/O error for {path}: {message}")]
    Io { path: String, message: String },

    #[error("Profile store XML error: {message}")]
    Xml { message: String },
}

impl LogweaveErrorCode for ProfileError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::Xml { .. } => error_code::STORE_IO_ERROR,
            _ => error_code::PROFILE_ERROR,
        }
    }
}
