//! Whole-method and whole-class logging, variable logging, and reapply.

use tree_sitter::Node;

use logweave_core::errors::{OpError, RenderError};

use super::context::{EditSet, Notice, OperationContext, SourceEdit};
use super::eligibility::eligible_for_class_logging;
use super::{insert, LoggingEngine};
use crate::adapter;
use crate::parser::JavaParser;

impl LoggingEngine<'_> {
    /// Insert entry/exit/catch statements into the selected method.
    pub fn log_method(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let method = ctx.selected_method()?;
        let mut set = EditSet::default();
        self.collect_method_edits(ctx, method, &mut set);
        Ok(set)
    }

    /// Insert entry/exit/catch statements into every eligible method of the
    /// selected type. Constructors and the skip-set are excluded.
    pub fn log_class(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let ty = ctx.selected_type()?;
        let mut set = EditSet::default();
        let mut eligible = 0usize;
        for method in adapter::methods(ty) {
            if !eligible_for_class_logging(method, ctx.source) {
                continue;
            }
            if adapter::method_body(method).is_none() {
                continue;
            }
            eligible += 1;
            self.collect_method_edits(ctx, method, &mut set);
        }
        if eligible == 0 {
            set.push_notice(Notice::NoEligibleMethods);
        }
        Ok(set)
    }

    /// Insert a variable log statement after the declaration under the
    /// cursor.
    pub fn log_variable(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let (name, declaration) = adapter::cursor_on_variable(ctx.root(), ctx.source, ctx.offset)
            .ok_or(OpError::NoVariableAtCursor { offset: ctx.offset })?;
        let mut set = EditSet::default();
        match self.variable_statement(&name) {
            Ok(stmt) => set.push_edit(insert::insert_after_statement(
                ctx.source,
                declaration,
                &stmt,
            )),
            Err(e) => self.note_skip(&mut set, e),
        }
        Ok(set)
    }

    /// Insert a default-level statement carrying `message` at the cursor,
    /// anchored to the first statement at or past the cursor in the
    /// innermost block.
    pub fn log_message(&self, ctx: &OperationContext, message: &str) -> Result<EditSet, OpError> {
        let block = adapter::enclosing_block(ctx.root(), ctx.offset)
            .ok_or(OpError::InvalidInsertPosition { offset: ctx.offset })?;
        let mut set = EditSet::default();
        match self.default_level_statement(message) {
            Ok(stmt) => set.push_edit(insert::anchored_insert(
                ctx.source,
                block,
                ctx.offset,
                &stmt,
            )),
            Err(e) => self.note_skip(&mut set, e),
        }
        Ok(set)
    }

    /// Remove then re-log one method. Emitted as a single edit replacing
    /// the method's span, computed over intermediate re-parses.
    pub fn reapply_method(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let method = ctx.selected_method()?;
        let ty = adapter::enclosing_type_of(method)
            .ok_or(OpError::NoEnclosingType { offset: ctx.offset })?;
        let type_ordinal = type_ordinal_of(ctx.root(), ty);
        let method_ordinal = adapter::methods(ty)
            .iter()
            .position(|m| *m == method)
            .unwrap_or(0);

        let removal = EditSet::from_edits(self.method_removal_edits(ctx, method));
        let stripped = removal.apply(ctx.source)?;

        let mut parser = JavaParser::new()?;
        let parsed = parser.parse(&stripped)?;
        let Some(target) = method_at(parsed.root(), type_ordinal, method_ordinal) else {
            return Ok(EditSet::default());
        };
        let ctx2 = OperationContext::new(&parsed, target.start_byte(), 0).with_method(target);
        let mut relog = EditSet::default();
        self.collect_method_edits(&ctx2, target, &mut relog);
        let relogged = relog.apply(&stripped)?;

        let reparsed = parser.parse(&relogged)?;
        let Some(result) = method_at(reparsed.root(), type_ordinal, method_ordinal) else {
            return Ok(EditSet::default());
        };

        let mut out = EditSet::default();
        for notice in relog.notices() {
            out.push_notice(notice.clone());
        }
        out.push_edit(SourceEdit::replace(
            method.start_byte(),
            method.end_byte(),
            reparsed.text_of(result).to_string(),
        ));
        Ok(out)
    }

    /// Remove then re-log every eligible method of the selected type.
    /// Emitted as a single edit replacing the type's span.
    pub fn reapply_class(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let ty = ctx.selected_type()?;
        let type_ordinal = type_ordinal_of(ctx.root(), ty);

        let mut removal = EditSet::default();
        for method in adapter::methods(ty) {
            removal.extend_edits(self.method_removal_edits(ctx, method));
        }
        let stripped = removal.apply(ctx.source)?;

        let mut parser = JavaParser::new()?;
        let parsed = parser.parse(&stripped)?;
        let Some(target_ty) = adapter::types(parsed.root()).into_iter().nth(type_ordinal) else {
            return Ok(EditSet::default());
        };
        let ctx2 =
            OperationContext::new(&parsed, target_ty.start_byte(), 0);
        let mut relog = EditSet::default();
        let mut eligible = 0usize;
        for method in adapter::methods(target_ty) {
            if !eligible_for_class_logging(method, parsed.source()) {
                continue;
            }
            if adapter::method_body(method).is_none() {
                continue;
            }
            eligible += 1;
            self.collect_method_edits(&ctx2, method, &mut relog);
        }
        let relogged = relog.apply(&stripped)?;

        let reparsed = parser.parse(&relogged)?;
        let Some(result_ty) = adapter::types(reparsed.root()).into_iter().nth(type_ordinal) else {
            return Ok(EditSet::default());
        };

        let mut out = EditSet::default();
        if eligible == 0 {
            out.push_notice(Notice::NoEligibleMethods);
        }
        for notice in relog.notices() {
            out.push_notice(notice.clone());
        }
        out.push_edit(SourceEdit::replace(
            ty.start_byte(),
            ty.end_byte(),
            reparsed.text_of(result_ty).to_string(),
        ));
        Ok(out)
    }

    /// Entry at body start; exit before every return directly in the body
    /// and, when the last statement is not a return, once at the end; one
    /// catch statement into each empty catch block. Non-empty catch blocks
    /// are left untouched so existing handling logic is not disturbed.
    pub(crate) fn collect_method_edits(
        &self,
        ctx: &OperationContext,
        method: Node,
        set: &mut EditSet,
    ) {
        let Some(body) = adapter::method_body(method) else {
            return;
        };
        let method_name = adapter::method_name(method, ctx.source);
        let type_name = adapter::enclosing_type_of(method)
            .map(|t| adapter::type_name(t, ctx.source))
            .unwrap_or_default();

        // A body with nothing inside takes entry and exit in one brace
        // rewrite; two separate edits would collide on the same range.
        if body.named_child_count() == 0 {
            let mut lines: Vec<String> = Vec::new();
            if !self.should_skip_for_start(method) {
                match self.entry_statement(&method_name, &type_name) {
                    Ok(stmt) => lines.push(stmt),
                    Err(e) => self.note_skip(set, e),
                }
            }
            if !self.should_skip_for_end(method) {
                match self.exit_statement(&method_name, &type_name) {
                    Ok(stmt) => lines.push(stmt),
                    Err(e) => self.note_skip(set, e),
                }
            }
            if !lines.is_empty() {
                set.push_edit(insert::insert_into_empty_braces(
                    ctx.source,
                    body,
                    &lines.join("\n"),
                ));
            }
            return;
        }

        if !self.should_skip_for_start(method) {
            match self.entry_statement(&method_name, &type_name) {
                Ok(stmt) => {
                    set.push_edit(insert::insert_as_first_statement(ctx.source, body, &stmt))
                }
                Err(e) => self.note_skip(set, e),
            }
        }

        if !self.should_skip_for_end(method) {
            let stmts = adapter::statements(body);
            for stmt in &stmts {
                if stmt.kind() == "return_statement" {
                    match self.exit_for_return(ctx, *stmt, &method_name, &type_name) {
                        Ok(text) => {
                            set.push_edit(insert::insert_before_statement(ctx.source, *stmt, &text))
                        }
                        Err(e) => self.note_skip(set, e),
                    }
                }
            }
            let last_is_return = stmts
                .last()
                .map(|s| s.kind() == "return_statement")
                .unwrap_or(false);
            if !last_is_return {
                match self.exit_statement(&method_name, &type_name) {
                    Ok(stmt) => set.push_edit(insert::append_to_block(ctx.source, body, &stmt)),
                    Err(e) => self.note_skip(set, e),
                }
            }
        }

        if self.is_catch_logging_enabled() {
            for clause in adapter::catch_clauses(method) {
                if !adapter::is_empty_catch_block(clause) {
                    continue;
                }
                let Some(clause_body) = clause.child_by_field_name("body") else {
                    continue;
                };
                let exception = adapter::catch_parameter_name(clause, ctx.source);
                match self.catch_statement(&method_name, &type_name, &exception) {
                    Ok(stmt) => set.push_edit(insert::insert_as_first_statement(
                        ctx.source,
                        clause_body,
                        &stmt,
                    )),
                    Err(e) => self.note_skip(set, e),
                }
            }
        }
    }

    fn exit_for_return(
        &self,
        ctx: &OperationContext,
        ret: Node,
        method_name: &str,
        type_name: &str,
    ) -> Result<String, RenderError> {
        if self.include_return_value() {
            if let Some(expr) = ret.named_child(0) {
                // Bare identifiers only: anything else would be evaluated a
                // second time by the log call.
                if expr.kind() == "identifier" {
                    return self.exit_statement_with_return(
                        method_name,
                        type_name,
                        adapter::node_text(expr, ctx.source),
                    );
                }
            }
        }
        self.exit_statement(method_name, type_name)
    }
}

/// Ordinal of a type among all type declarations, document order.
fn type_ordinal_of(root: Node, ty: Node) -> usize {
    adapter::types(root)
        .iter()
        .position(|t| *t == ty)
        .unwrap_or(0)
}

/// Method at (type ordinal, method ordinal), stable across edits that do
/// not add or remove declarations.
fn method_at(root: Node<'_>, type_ordinal: usize, method_ordinal: usize) -> Option<Node<'_>> {
    let ty = adapter::types(root).into_iter().nth(type_ordinal)?;
    adapter::methods(ty).into_iter().nth(method_ordinal)
}
