//! Position/level enablement predicates and the whole-class skip-set.

use tree_sitter::Node;

use super::LoggingEngine;
use crate::adapter::{self, MethodKind};
use crate::templates::keys;

impl LoggingEngine<'_> {
    /// Whether entry statements are inserted at all: the position must be
    /// enabled and the level it logs at must be enabled.
    pub fn is_start_logging_enabled(&self) -> bool {
        self.config().effective_start_enabled()
            && self
                .config()
                .level_enabled(self.profile().str_setting(keys::LEVEL_FOR_POS_START))
    }

    pub fn is_end_logging_enabled(&self) -> bool {
        self.config().effective_end_enabled()
            && self
                .config()
                .level_enabled(self.profile().str_setting(keys::LEVEL_FOR_POS_END))
    }

    pub fn is_catch_logging_enabled(&self) -> bool {
        self.config().effective_catch_enabled()
            && self
                .config()
                .level_enabled(self.profile().str_setting(keys::LEVEL_FOR_POS_CATCH))
    }

    pub fn include_return_value(&self) -> bool {
        self.config().effective_include_return_value()
    }

    /// Whether a method gets no entry statement: position disabled or no
    /// body to insert into.
    pub fn should_skip_for_start(&self, method: Node) -> bool {
        !self.is_start_logging_enabled() || adapter::method_body(method).is_none()
    }

    pub fn should_skip_for_end(&self, method: Node) -> bool {
        !self.is_end_logging_enabled() || adapter::method_body(method).is_none()
    }
}

/// Whether a method participates in whole-class logging. Constructors,
/// getters, setters, `toString`, `hashCode`, and `equals` are excluded:
/// blanket logging of these trivial methods adds noise without debugging
/// value.
pub fn eligible_for_class_logging(method: Node, source: &str) -> bool {
    adapter::classify_method(method, source) == MethodKind::Plain
}
