//! Console-print substitution.

use tree_sitter::Node;

use logweave_core::errors::OpError;

use super::context::{EditSet, Notice, OperationContext, SourceEdit};
use super::LoggingEngine;
use crate::adapter;
use crate::templates::keys;

/// Which standard stream a console print targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Out,
    Err,
}

impl LoggingEngine<'_> {
    /// Replace `System.out`/`System.err` print statements in the selected
    /// method with severity-appropriate log calls.
    pub fn replace_system_println_in_method(
        &self,
        ctx: &OperationContext,
    ) -> Result<EditSet, OpError> {
        let method = ctx.selected_method()?;
        Ok(self.replace_println_in(ctx, method))
    }

    /// As above, across the whole selected type.
    pub fn replace_system_println_in_class(
        &self,
        ctx: &OperationContext,
    ) -> Result<EditSet, OpError> {
        let ty = ctx.selected_type()?;
        Ok(self.replace_println_in(ctx, ty))
    }

    /// Standard output maps to the profile's stdout severity, standard
    /// error to its stderr severity (error output is assumed higher
    /// severity). Only whole print statements are replaced; a print nested
    /// inside another expression is left alone.
    fn replace_println_in(&self, ctx: &OperationContext, scope: Node) -> EditSet {
        let mut set = EditSet::default();
        let mut calls = Vec::new();
        adapter::collect_descendants(scope, "method_invocation", &mut calls);

        let mut found = false;
        for call in calls {
            let Some(stream) = console_stream(call, ctx.source) else {
                continue;
            };
            let Some(stmt) = call
                .parent()
                .filter(|p| p.kind() == "expression_statement")
            else {
                continue;
            };
            found = true;

            let level_key = match stream {
                Stream::Out => keys::LEVEL_FOR_STDOUT,
                Stream::Err => keys::LEVEL_FOR_STDERR,
            };
            let level = self.profile().str_setting(level_key).to_string();
            let args = invocation_arguments(call, ctx.source);
            let message = if args.is_empty() {
                "\"\"".to_string()
            } else {
                args
            };
            match self.level_statement(&level, &message) {
                Ok(text) => {
                    set.push_edit(SourceEdit::replace(stmt.start_byte(), stmt.end_byte(), text))
                }
                Err(e) => self.note_skip(&mut set, e),
            }
        }

        if !found {
            set.push_notice(Notice::NoConsoleCalls);
        }
        set
    }
}

fn console_stream(call: Node, source: &str) -> Option<Stream> {
    let name = call
        .child_by_field_name("name")
        .map(|n| adapter::node_text(n, source))
        .unwrap_or("");
    if name != "println" && name != "print" {
        return None;
    }
    let object = call.child_by_field_name("object")?;
    match adapter::node_text(object, source) {
        "System.out" => Some(Stream::Out),
        "System.err" => Some(Stream::Err),
        _ => None,
    }
}

/// The argument list text of an invocation, parentheses stripped.
fn invocation_arguments(call: Node, source: &str) -> String {
    match call.child_by_field_name("arguments") {
        Some(args) => adapter::node_text(args, source)
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim()
            .to_string(),
        None => String::new(),
    }
}
