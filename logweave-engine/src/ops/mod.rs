//! Logging operation engine.
//!
//! One entry point per feature: declare the logger, log a method or class,
//! remove or reapply statements, log a variable, substitute console prints.
//! Every operation reads an [`OperationContext`] and returns an [`EditSet`]
//! the caller applies to the text buffer; the engine never touches storage.

pub mod context;

mod declare;
mod eligibility;
pub(crate) mod insert;
mod method;
mod println;
mod remove;
mod statements;

pub use context::{EditSet, Notice, OperationContext, SourceEdit};

use logweave_core::config::LogConfig;
use logweave_core::types::FxHashSet;

use crate::profiles::Profile;

/// The logging operation engine, bound to one profile and one
/// configuration for the duration of an invocation.
pub struct LoggingEngine<'a> {
    profile: &'a Profile,
    config: &'a LogConfig,
    /// Method names a log call of the active convention may carry,
    /// precomputed for statement recognition.
    level_methods: FxHashSet<String>,
}

impl<'a> LoggingEngine<'a> {
    pub fn new(profile: &'a Profile, config: &'a LogConfig) -> Self {
        Self {
            profile,
            config,
            level_methods: profile.level_method_names(),
        }
    }

    pub fn profile(&self) -> &Profile {
        self.profile
    }

    pub fn config(&self) -> &LogConfig {
        self.config
    }
}
