//! Logging operation configuration.
//!
//! The preference layer that owns these values is outside the engine; the
//! engine reads them through this struct, passed by reference into every
//! operation.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Configuration consumed by the logging operation engine.
///
/// Every field is optional; `effective_*` accessors apply the defaults so a
/// partially specified TOML document behaves predictably.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Name of the logger field. Default: "logger".
    pub logger_name: Option<String>,
    /// Declare the logger field `static`. Default: true.
    pub use_static: Option<bool>,
    /// Declare the logger field `final`. Default: true.
    pub use_final: Option<bool>,
    /// Add the convention's import statements when declaring. Default: true.
    pub add_imports: Option<bool>,
    /// Insert entry statements at method start. Default: true.
    pub start_enabled: Option<bool>,
    /// Insert exit statements at method end. Default: true.
    pub end_enabled: Option<bool>,
    /// Insert catch statements into empty catch blocks. Default: true.
    pub catch_enabled: Option<bool>,
    /// Include the returned identifier in exit statements. Default: true.
    pub include_return_value: Option<bool>,
    /// Wrap entry/exit/variable statements in an is-enabled guard.
    /// Default: false.
    pub use_guard: Option<bool>,
    /// Levels the engine may log at. Empty means all levels of the active
    /// profile are enabled.
    #[serde(default)]
    pub enabled_levels: Vec<String>,
    /// Delimiter between the method name and a position marker.
    /// Default: " - ".
    pub delimiter: Option<String>,
    /// Delimiter between a position marker and a free-form message.
    /// Default: ": ".
    pub message_delimiter: Option<String>,
    /// Level for statements without an explicit level. Default: "debug".
    pub default_level: Option<String>,
}

impl LogConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        tracing::debug!(logger = config.effective_logger_name(), "config loaded");
        Ok(config)
    }

    pub fn effective_logger_name(&self) -> &str {
        self.logger_name
            .as_deref()
            .unwrap_or(constants::DEFAULT_LOGGER_NAME)
    }

    pub fn effective_use_static(&self) -> bool {
        self.use_static.unwrap_or(true)
    }

    pub fn effective_use_final(&self) -> bool {
        self.use_final.unwrap_or(true)
    }

    pub fn effective_add_imports(&self) -> bool {
        self.add_imports.unwrap_or(true)
    }

    pub fn effective_start_enabled(&self) -> bool {
        self.start_enabled.unwrap_or(true)
    }

    pub fn effective_end_enabled(&self) -> bool {
        self.end_enabled.unwrap_or(true)
    }

    pub fn effective_catch_enabled(&self) -> bool {
        self.catch_enabled.unwrap_or(true)
    }

    pub fn effective_include_return_value(&self) -> bool {
        self.include_return_value.unwrap_or(true)
    }

    pub fn effective_use_guard(&self) -> bool {
        self.use_guard.unwrap_or(false)
    }

    pub fn effective_delimiter(&self) -> &str {
        self.delimiter
            .as_deref()
            .unwrap_or(constants::DEFAULT_DELIMITER)
    }

    pub fn effective_message_delimiter(&self) -> &str {
        self.message_delimiter
            .as_deref()
            .unwrap_or(constants::DEFAULT_MESSAGE_DELIMITER)
    }

    pub fn effective_default_level(&self) -> &str {
        self.default_level
            .as_deref()
            .unwrap_or(constants::DEFAULT_LEVEL)
    }

    /// Whether the given severity level is enabled. An empty list enables
    /// every level the active profile defines.
    pub fn level_enabled(&self, level: &str) -> bool {
        self.enabled_levels.is_empty() || self.enabled_levels.iter().any(|l| l == level)
    }
}
