//! Shared constants for the Logweave instrumentation engine.

/// Logweave version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default logger field name declared and recognized by the engine.
pub const DEFAULT_LOGGER_NAME: &str = "logger";

/// Title of the built-in profile used as the session default.
pub const DEFAULT_PROFILE_TITLE: &str = "SLF4J";

/// Conventional logger field names recognized during framework exchange
/// (compared case-insensitively).
pub const CONVENTIONAL_LOGGER_NAMES: &[&str] = &["logger", "log", "_logger", "_log"];

/// Default delimiter between the method name and a position marker.
pub const DEFAULT_DELIMITER: &str = " - ";

/// Default delimiter between a position marker and a free-form message.
pub const DEFAULT_MESSAGE_DELIMITER: &str = ": ";

/// Default severity level for statements without an explicit level.
pub const DEFAULT_LEVEL: &str = "debug";

/// Schema version written to the profile store root element.
pub const PROFILE_STORE_VERSION: u32 = 1;

/// Indentation unit used when synthesizing nested statement text.
pub const INDENT_UNIT: &str = "    ";
