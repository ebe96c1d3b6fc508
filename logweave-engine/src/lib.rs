//! Logweave engine — augments Java source with logging statements.
//!
//! The engine consumes a parsed syntax tree plus a selection locus and
//! produces batches of source edits; it never touches files or displays.
//! Conventions (SLF4J-style, Log4j2-style, JDK-logging-style, plus
//! user-defined ones) are parameterized through the profile/template model,
//! so every operation works unchanged across target logging APIs.

pub mod adapter;
pub mod exchange;
pub mod ops;
pub mod parser;
pub mod profiles;
pub mod templates;
