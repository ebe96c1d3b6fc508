//! Tracing setup for Logweave.

pub mod setup;

pub use setup::init_tracing;
