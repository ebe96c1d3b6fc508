//! LogweaveErrorCode trait for embedder-facing error codes.

/// Trait for converting Logweave errors to stable error-code strings.
/// Every error enum implements this so an embedding command layer can
/// switch on a structured code instead of a display string.
pub trait LogweaveErrorCode {
    /// Returns the stable error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted embedder string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the embedder boundary.
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROFILE_ERROR: &str = "PROFILE_ERROR";
pub const STORE_IO_ERROR: &str = "STORE_IO_ERROR";
pub const TEMPLATE_MISSING: &str = "TEMPLATE_MISSING";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const AMBIGUOUS_SELECTION: &str = "AMBIGUOUS_SELECTION";
pub const EDIT_CONFLICT: &str = "EDIT_CONFLICT";
pub const DETECTION_FAILED: &str = "DETECTION_FAILED";
pub const EXCHANGE_ERROR: &str = "EXCHANGE_ERROR";
