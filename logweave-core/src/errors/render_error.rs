//! Template rendering errors.

use super::error_code::{self, LogweaveErrorCode};

/// Errors raised while synthesizing a statement from a template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The active profile has no template under this key. Conventions
    /// legitimately differ in level/position coverage, so callers skip the
    /// single statement instead of failing the operation.
    #[error("Profile has no template for key '{key}'")]
    MissingTemplate { key: String },

    /// The substituted text does not parse as the expected fragment kind.
    #[error("Rendered template '{key}' is not a valid fragment: {rendered}")]
    InvalidFragment { key: String, rendered: String },
}

impl LogweaveErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTemplate { .. } => error_code::TEMPLATE_MISSING,
            Self::InvalidFragment { .. } => error_code::RENDER_ERROR,
        }
    }
}
