//! Recognized settings keys for profiles, and builders for per-level keys.

// ---- Logger identity ----

pub const LOGGER_TYPE: &str = "LOGGER_TYPE";
pub const LOGGER_FACTORY: &str = "LOGGER_FACTORY";
pub const LOGGER_FACTORY_METHOD: &str = "LOGGER_FACTORY_METHOD";
pub const LOGGER_DECLARATION: &str = "LOGGER_DECLARATION";
pub const LOGGER_IMPORTS: &str = "LOGGER_IMPORTS";

/// Ordered level vocabulary of the convention.
pub const LEVELS: &str = "LEVELS";

// ---- Position-specific statements ----

pub const LOGGER_POS_START_STATEMENT: &str = "LOGGER_POS_START_STATEMENT";
pub const LOGGER_POS_END_STATEMENT: &str = "LOGGER_POS_END_STATEMENT";
pub const LOGGER_POS_END_RETURN_STATEMENT: &str = "LOGGER_POS_END_RETURN_STATEMENT";
pub const LOGGER_POS_CATCH_STATEMENT: &str = "LOGGER_POS_CATCH_STATEMENT";
pub const LOGGER_VARIABLE_STATEMENT: &str = "LOGGER_VARIABLE_STATEMENT";

// ---- Severity routing ----

pub const LEVEL_FOR_POS_START: &str = "LEVEL_FOR_POS_START";
pub const LEVEL_FOR_POS_END: &str = "LEVEL_FOR_POS_END";
pub const LEVEL_FOR_POS_CATCH: &str = "LEVEL_FOR_POS_CATCH";
pub const LEVEL_FOR_VARIABLE: &str = "LEVEL_FOR_VARIABLE";
pub const LEVEL_FOR_STDOUT: &str = "LEVEL_FOR_STDOUT";
pub const LEVEL_FOR_STDERR: &str = "LEVEL_FOR_STDERR";

// ---- Per-level key builders ----

/// Key of the log-call method name for a level, e.g. `LOG_METHOD_DEBUG`.
pub fn log_method_key(level: &str) -> String {
    format!("LOG_METHOD_{}", level.to_ascii_uppercase())
}

/// Key of the statement template for a level, e.g. `LOGGER_DEBUG_STATEMENT`.
pub fn level_statement_key(level: &str) -> String {
    format!("LOGGER_{}_STATEMENT", level.to_ascii_uppercase())
}

/// Key of the is-enabled guard condition for a level,
/// e.g. `LOGGER_IS_DEBUG_ENABLED_STATEMENT`.
pub fn is_enabled_key(level: &str) -> String {
    format!("LOGGER_IS_{}_ENABLED_STATEMENT", level.to_ascii_uppercase())
}
