//! Hard-coded built-in convention definitions.
//!
//! Normally the built-ins are decoded from the embedded resource; this
//! module is the fallback used when that resource is absent or unreadable,
//! and the reference the resource is kept in sync with.

use super::model::{Profile, ProfileOwner, SettingValue};
use crate::templates::keys;

pub const SLF4J_NAME: &str = "5c6c46d1-8f7a-4a6e-9b1d-2f29f4a0d9c3";
pub const LOG4J2_NAME: &str = "b02f7c4e-3d9a-4f4b-8c55-71d6e0a4b2e8";
pub const JDK_NAME: &str = "9a41d2ef-6b3c-4e0d-a7f2-c85a13b9e644";

/// The three built-in conventions.
pub fn default_profiles() -> Vec<Profile> {
    vec![slf4j(), log4j2(), jdk_logging()]
}

fn capitalize(level: &str) -> String {
    let mut chars = level.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Levels where the statement takes a raw expression with `{}` formatting.
fn set_braced_levels(profile: &mut Profile, levels: &[&str]) {
    for level in levels {
        profile.set_str(keys::log_method_key(level), level);
        profile.set_str(
            keys::level_statement_key(level),
            &format!("${{logger}}.{level}(${{message}});"),
        );
        profile.set_str(
            keys::is_enabled_key(level),
            &format!("${{logger}}.is{}Enabled()", capitalize(level)),
        );
    }
    profile.set(
        keys::LEVELS,
        SettingValue::List(levels.iter().map(|s| s.to_string()).collect()),
    );
}

fn slf4j() -> Profile {
    let mut p = Profile::new(ProfileOwner::BuiltIn, SLF4J_NAME, "SLF4J", 1);
    p.set_str(keys::LOGGER_TYPE, "org.slf4j.Logger");
    p.set_str(keys::LOGGER_FACTORY, "org.slf4j.LoggerFactory");
    p.set_str(keys::LOGGER_FACTORY_METHOD, "getLogger");
    p.set_str(
        keys::LOGGER_DECLARATION,
        "private static final Logger ${logger} = LoggerFactory.getLogger(${enclosing_type}.class);",
    );
    p.set_list(
        keys::LOGGER_IMPORTS,
        &["org.slf4j.Logger", "org.slf4j.LoggerFactory"],
    );
    set_braced_levels(&mut p, &["trace", "debug", "info", "warn", "error"]);
    p.set_str(
        keys::LOGGER_POS_START_STATEMENT,
        "${logger}.debug(\"${enclosing_method}${delimiter}start\");",
    );
    p.set_str(
        keys::LOGGER_POS_END_STATEMENT,
        "${logger}.debug(\"${enclosing_method}${delimiter}end\");",
    );
    p.set_str(
        keys::LOGGER_POS_END_RETURN_STATEMENT,
        "${logger}.debug(\"${enclosing_method}${delimiter}end${delimiter_msg}{}\", ${return_value});",
    );
    p.set_str(
        keys::LOGGER_POS_CATCH_STATEMENT,
        "${logger}.error(\"${enclosing_method}${delimiter}exception\", ${exception});",
    );
    p.set_str(
        keys::LOGGER_VARIABLE_STATEMENT,
        "${logger}.debug(\"${variables}${delimiter_msg}{}\", ${variables});",
    );
    p.set_str(keys::LEVEL_FOR_POS_START, "debug");
    p.set_str(keys::LEVEL_FOR_POS_END, "debug");
    p.set_str(keys::LEVEL_FOR_POS_CATCH, "error");
    p.set_str(keys::LEVEL_FOR_VARIABLE, "debug");
    p.set_str(keys::LEVEL_FOR_STDOUT, "info");
    p.set_str(keys::LEVEL_FOR_STDERR, "error");
    p
}

fn log4j2() -> Profile {
    let mut p = Profile::new(ProfileOwner::BuiltIn, LOG4J2_NAME, "Log4j2", 1);
    p.set_str(keys::LOGGER_TYPE, "org.apache.logging.log4j.Logger");
    p.set_str(keys::LOGGER_FACTORY, "org.apache.logging.log4j.LogManager");
    p.set_str(keys::LOGGER_FACTORY_METHOD, "getLogger");
    p.set_str(
        keys::LOGGER_DECLARATION,
        "private static final Logger ${logger} = LogManager.getLogger(${enclosing_type}.class);",
    );
    p.set_list(
        keys::LOGGER_IMPORTS,
        &[
            "org.apache.logging.log4j.LogManager",
            "org.apache.logging.log4j.Logger",
        ],
    );
    set_braced_levels(&mut p, &["trace", "debug", "info", "warn", "error", "fatal"]);
    p.set_str(
        keys::LOGGER_POS_START_STATEMENT,
        "${logger}.debug(\"${enclosing_method}${delimiter}start\");",
    );
    p.set_str(
        keys::LOGGER_POS_END_STATEMENT,
        "${logger}.debug(\"${enclosing_method}${delimiter}end\");",
    );
    p.set_str(
        keys::LOGGER_POS_END_RETURN_STATEMENT,
        "${logger}.debug(\"${enclosing_method}${delimiter}end${delimiter_msg}{}\", ${return_value});",
    );
    p.set_str(
        keys::LOGGER_POS_CATCH_STATEMENT,
        "${logger}.error(\"${enclosing_method}${delimiter}exception\", ${exception});",
    );
    p.set_str(
        keys::LOGGER_VARIABLE_STATEMENT,
        "${logger}.debug(\"${variables}${delimiter_msg}{}\", ${variables});",
    );
    p.set_str(keys::LEVEL_FOR_POS_START, "debug");
    p.set_str(keys::LEVEL_FOR_POS_END, "debug");
    p.set_str(keys::LEVEL_FOR_POS_CATCH, "error");
    p.set_str(keys::LEVEL_FOR_VARIABLE, "debug");
    p.set_str(keys::LEVEL_FOR_STDOUT, "info");
    p.set_str(keys::LEVEL_FOR_STDERR, "error");
    p
}

fn jdk_logging() -> Profile {
    let mut p = Profile::new(ProfileOwner::BuiltIn, JDK_NAME, "JDK Logging", 1);
    p.set_str(keys::LOGGER_TYPE, "java.util.logging.Logger");
    // The logger type is its own factory.
    p.set_str(keys::LOGGER_FACTORY, "java.util.logging.Logger");
    p.set_str(keys::LOGGER_FACTORY_METHOD, "getLogger");
    p.set_str(
        keys::LOGGER_DECLARATION,
        "private static final Logger ${logger} = Logger.getLogger(${enclosing_type}.class.getName());",
    );
    p.set_list(keys::LOGGER_IMPORTS, &["java.util.logging.Logger"]);
    let levels = ["finest", "finer", "fine", "config", "info", "warning", "severe"];
    for level in levels {
        p.set_str(keys::log_method_key(level), level);
        p.set_str(
            keys::level_statement_key(level),
            &format!("${{logger}}.{level}(String.valueOf(${{message}}));"),
        );
        p.set_str(
            keys::is_enabled_key(level),
            &format!(
                "${{logger}}.isLoggable(java.util.logging.Level.{})",
                level.to_ascii_uppercase()
            ),
        );
    }
    p.set(
        keys::LEVELS,
        SettingValue::List(levels.iter().map(|s| s.to_string()).collect()),
    );
    p.set_str(
        keys::LOGGER_POS_START_STATEMENT,
        "${logger}.fine(\"${enclosing_method}${delimiter}start\");",
    );
    p.set_str(
        keys::LOGGER_POS_END_STATEMENT,
        "${logger}.fine(\"${enclosing_method}${delimiter}end\");",
    );
    p.set_str(
        keys::LOGGER_POS_END_RETURN_STATEMENT,
        "${logger}.fine(\"${enclosing_method}${delimiter}end${delimiter_msg}\" + ${return_value});",
    );
    p.set_str(
        keys::LOGGER_POS_CATCH_STATEMENT,
        "${logger}.log(java.util.logging.Level.SEVERE, \"${enclosing_method}${delimiter}exception\", ${exception});",
    );
    p.set_str(
        keys::LOGGER_VARIABLE_STATEMENT,
        "${logger}.fine(\"${variables}${delimiter_msg}\" + ${variables});",
    );
    p.set_str(keys::LEVEL_FOR_POS_START, "fine");
    p.set_str(keys::LEVEL_FOR_POS_END, "fine");
    p.set_str(keys::LEVEL_FOR_POS_CATCH, "severe");
    p.set_str(keys::LEVEL_FOR_VARIABLE, "fine");
    p.set_str(keys::LEVEL_FOR_STDOUT, "info");
    p.set_str(keys::LEVEL_FOR_STDERR, "severe");
    p
}
