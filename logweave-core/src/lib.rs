//! Core foundation for the Logweave instrumentation engine: typed errors,
//! configuration, tracing setup, shared collections, and constants.
//!
//! The engine itself (parsing, templates, profiles, operations) lives in
//! `logweave-engine`; this crate holds everything both the engine and an
//! embedder need to agree on.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
