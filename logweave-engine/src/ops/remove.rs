//! Log-statement recognition and removal.
//!
//! Recognition matches a closed set of shapes structurally against the
//! parsed statement — a plain logger call, or an is-enabled guard wrapping
//! only logger calls — never free-form text, so similarly named user code
//! is not swept up. Removal is scoped one block level at a time, which
//! bounds it to statements the engine itself is likely to have produced.

use tree_sitter::Node;

use logweave_core::errors::OpError;

use super::context::{EditSet, OperationContext, SourceEdit};
use super::{insert, LoggingEngine};
use crate::adapter;
use crate::parser::JavaParser;
use crate::templates::keys;

impl LoggingEngine<'_> {
    /// Whether a statement is logger-call-shaped for the active profile:
    /// a plain call on the configured logger, or such a call wrapped in an
    /// is-enabled guard.
    pub fn is_log_statement(&self, stmt: Node, source: &str) -> bool {
        self.recognize_plain(stmt, source) || self.recognize_guarded(stmt, source)
    }

    fn recognize_plain(&self, stmt: Node, source: &str) -> bool {
        if stmt.kind() != "expression_statement" {
            return false;
        }
        match stmt.named_child(0) {
            Some(expr) => self.is_logger_call(expr, source),
            None => false,
        }
    }

    fn is_logger_call(&self, expr: Node, source: &str) -> bool {
        if expr.kind() != "method_invocation" {
            return false;
        }
        let Some(object) = expr.child_by_field_name("object") else {
            return false;
        };
        if object.kind() != "identifier"
            || adapter::node_text(object, source) != self.config().effective_logger_name()
        {
            return false;
        }
        let name = expr
            .child_by_field_name("name")
            .map(|n| adapter::node_text(n, source))
            .unwrap_or("");
        self.level_methods.contains(name)
    }

    /// `if (logger.isXEnabled()) { logger.x(...); }` — matched as one unit.
    fn recognize_guarded(&self, stmt: Node, source: &str) -> bool {
        if stmt.kind() != "if_statement" || stmt.child_by_field_name("alternative").is_some() {
            return false;
        }
        let Some(condition) = stmt.child_by_field_name("condition") else {
            return false;
        };
        if !self.is_guard_condition(condition, source) {
            return false;
        }
        match stmt.child_by_field_name("consequence") {
            Some(consequence) if consequence.kind() == "block" => {
                let stmts = adapter::statements(consequence);
                !stmts.is_empty() && stmts.iter().all(|s| self.recognize_plain(*s, source))
            }
            Some(consequence) => self.recognize_plain(consequence, source),
            None => false,
        }
    }

    fn is_guard_condition(&self, condition: Node, source: &str) -> bool {
        let expr = if condition.kind() == "parenthesized_expression" {
            match condition.named_child(0) {
                Some(inner) => inner,
                None => return false,
            }
        } else {
            condition
        };
        if expr.kind() != "method_invocation" {
            return false;
        }
        let Some(object) = expr.child_by_field_name("object") else {
            return false;
        };
        if object.kind() != "identifier"
            || adapter::node_text(object, source) != self.config().effective_logger_name()
        {
            return false;
        }
        let name = expr
            .child_by_field_name("name")
            .map(|n| adapter::node_text(n, source))
            .unwrap_or("");
        (name.starts_with("is") && name.ends_with("Enabled")) || name == "isLoggable"
    }

    /// Deletion edits for every plain log statement at the top level of
    /// `block`.
    pub fn remove_log_statements(&self, ctx: &OperationContext, block: Node) -> Vec<SourceEdit> {
        adapter::statements(block)
            .into_iter()
            .filter(|s| self.recognize_plain(*s, ctx.source))
            .map(|s| insert::deletion_edit(ctx.source, s))
            .collect()
    }

    /// As [`remove_log_statements`](Self::remove_log_statements), but also
    /// removing guard-wrapped log statements as a single unit.
    pub fn remove_log_statements_advanced(
        &self,
        ctx: &OperationContext,
        block: Node,
    ) -> Vec<SourceEdit> {
        adapter::statements(block)
            .into_iter()
            .filter(|s| self.is_log_statement(*s, ctx.source))
            .map(|s| insert::deletion_edit(ctx.source, s))
            .collect()
    }

    /// Remove log statements from the selected method: its body, plus each
    /// catch block, one level each.
    pub fn remove_method(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let method = ctx.selected_method()?;
        Ok(EditSet::from_edits(self.method_removal_edits(ctx, method)))
    }

    /// Remove log statements from every method of the selected type.
    pub fn remove_class(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let ty = ctx.selected_type()?;
        let mut set = EditSet::default();
        for method in adapter::methods(ty) {
            set.extend_edits(self.method_removal_edits(ctx, method));
        }
        Ok(set)
    }

    pub(crate) fn method_removal_edits(
        &self,
        ctx: &OperationContext,
        method: Node,
    ) -> Vec<SourceEdit> {
        let mut edits = Vec::new();
        if let Some(body) = adapter::method_body(method) {
            edits.extend(self.remove_log_statements_advanced(ctx, body));
        }
        for clause in adapter::catch_clauses(method) {
            if let Some(clause_body) = clause.child_by_field_name("body") {
                edits.extend(self.remove_log_statements_advanced(ctx, clause_body));
            }
        }
        edits
    }

    /// Remove every log statement from the type, then the logger field,
    /// then the convention's imports — the imports only when a re-parse of
    /// the stripped source shows no remaining reference to the logger
    /// identifier. Two passes, so a logger still referenced somewhere never
    /// loses its imports.
    pub fn remove_logger_complete(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let ty = ctx.selected_type()?;
        let mut set = EditSet::default();
        for method in adapter::methods(ty) {
            set.extend_edits(self.method_removal_edits(ctx, method));
        }

        let logger_name = self.config().effective_logger_name();
        if let Some(field) = adapter::find_field(ty, ctx.source, logger_name) {
            set.push_edit(insert::deletion_edit(ctx.source, field));
        }

        let stripped = set.apply(ctx.source)?;
        let mut parser = JavaParser::new()?;
        let reparsed = parser.parse(&stripped)?;
        if !adapter::has_identifier(reparsed.root(), reparsed.source(), logger_name) {
            let prefix = self.profile().import_prefix();
            let import_paths = self.profile().list_setting(keys::LOGGER_IMPORTS);
            for import in adapter::imports(ctx.root()) {
                let path = adapter::import_path(import, ctx.source);
                if path.starts_with(&format!("{prefix}."))
                    || import_paths.iter().any(|p| *p == path)
                {
                    set.push_edit(insert::deletion_edit(ctx.source, import));
                }
            }
        } else {
            tracing::debug!(
                logger = logger_name,
                "logger still referenced, keeping imports"
            );
        }
        Ok(set)
    }
}
