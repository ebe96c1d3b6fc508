//! Statement synthesis: placeholder binding and rendering per position.

use logweave_core::constants::INDENT_UNIT;
use logweave_core::errors::RenderError;

use super::context::{EditSet, Notice};
use super::LoggingEngine;
use crate::parser::FragmentKind;
use crate::templates::{self, keys, Bindings};

impl LoggingEngine<'_> {
    pub(crate) fn base_bindings(&self) -> Bindings {
        Bindings::new()
            .logger(self.config().effective_logger_name())
            .delimiter(self.config().effective_delimiter())
            .delimiter_msg(self.config().effective_message_delimiter())
    }

    /// Statement logged at method start.
    pub fn entry_statement(
        &self,
        method_name: &str,
        type_name: &str,
    ) -> Result<String, RenderError> {
        let bindings = self
            .base_bindings()
            .enclosing_method(method_name)
            .enclosing_type(type_name);
        let stmt = templates::render(
            self.profile(),
            keys::LOGGER_POS_START_STATEMENT,
            &bindings,
            FragmentKind::Statement,
        )?;
        Ok(self.maybe_guard(&stmt, keys::LEVEL_FOR_POS_START))
    }

    /// Statement logged at method end.
    pub fn exit_statement(
        &self,
        method_name: &str,
        type_name: &str,
    ) -> Result<String, RenderError> {
        let bindings = self
            .base_bindings()
            .enclosing_method(method_name)
            .enclosing_type(type_name);
        let stmt = templates::render(
            self.profile(),
            keys::LOGGER_POS_END_STATEMENT,
            &bindings,
            FragmentKind::Statement,
        )?;
        Ok(self.maybe_guard(&stmt, keys::LEVEL_FOR_POS_END))
    }

    /// Exit statement carrying the returned identifier. Only used for bare
    /// identifier returns, so the expression is never evaluated twice.
    pub fn exit_statement_with_return(
        &self,
        method_name: &str,
        type_name: &str,
        return_value: &str,
    ) -> Result<String, RenderError> {
        let bindings = self
            .base_bindings()
            .enclosing_method(method_name)
            .enclosing_type(type_name)
            .return_value(return_value);
        let stmt = templates::render(
            self.profile(),
            keys::LOGGER_POS_END_RETURN_STATEMENT,
            &bindings,
            FragmentKind::Statement,
        )?;
        Ok(self.maybe_guard(&stmt, keys::LEVEL_FOR_POS_END))
    }

    /// Statement logged as the first statement of a catch block. Never
    /// guarded: error-path logging is unconditional in all built-in
    /// conventions.
    pub fn catch_statement(
        &self,
        method_name: &str,
        type_name: &str,
        exception: &str,
    ) -> Result<String, RenderError> {
        let bindings = self
            .base_bindings()
            .enclosing_method(method_name)
            .enclosing_type(type_name)
            .exception(exception);
        templates::render(
            self.profile(),
            keys::LOGGER_POS_CATCH_STATEMENT,
            &bindings,
            FragmentKind::Statement,
        )
    }

    /// Statement logging a variable's value after its declaration.
    pub fn variable_statement(&self, variable: &str) -> Result<String, RenderError> {
        let bindings = self.base_bindings().variables(variable);
        let stmt = templates::render(
            self.profile(),
            keys::LOGGER_VARIABLE_STATEMENT,
            &bindings,
            FragmentKind::Statement,
        )?;
        Ok(self.maybe_guard(&stmt, keys::LEVEL_FOR_VARIABLE))
    }

    /// Statement at the configured default level carrying `message`.
    pub fn default_level_statement(&self, message: &str) -> Result<String, RenderError> {
        let level = self.config().effective_default_level().to_string();
        self.level_statement(&level, message)
    }

    /// Statement at an explicit level carrying `message` (a Java
    /// expression).
    pub fn level_statement(&self, level: &str, message: &str) -> Result<String, RenderError> {
        let bindings = self.base_bindings().message(message);
        templates::render(
            self.profile(),
            &keys::level_statement_key(level),
            &bindings,
            FragmentKind::Statement,
        )
    }

    /// Wrap a statement in the is-enabled guard for the level stored under
    /// `level_key`, when guarding is configured and the profile has a guard
    /// template for that level.
    fn maybe_guard(&self, stmt: &str, level_key: &str) -> String {
        if !self.config().effective_use_guard() {
            return stmt.to_string();
        }
        let level = self.profile().str_setting(level_key);
        match self.profile().template(&keys::is_enabled_key(level)) {
            Some(condition_template) => {
                let condition = templates::substitute(condition_template, &self.base_bindings());
                format!("if ({condition}) {{\n{INDENT_UNIT}{stmt}\n}}")
            }
            None => stmt.to_string(),
        }
    }

    /// Record a synthesis failure. Missing templates become notices
    /// (conventions legitimately differ in coverage); invalid fragments are
    /// skipped with a warning.
    pub(crate) fn note_skip(&self, set: &mut EditSet, err: RenderError) {
        match err {
            RenderError::MissingTemplate { key } => set.push_notice(Notice::TemplateMissing { key }),
            RenderError::InvalidFragment { key, .. } => {
                tracing::warn!(
                    key = key.as_str(),
                    "skipping statement: rendered fragment did not parse"
                );
            }
        }
    }
}
