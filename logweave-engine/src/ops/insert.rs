//! Insertion-point computation and indentation-aware edit builders.
//!
//! Insertion is deterministic: a cursor-anchored insert targets the first
//! top-level statement whose start position is at or past the cursor, and
//! appends last when none qualifies.

use tree_sitter::Node;

use logweave_core::constants::INDENT_UNIT;

use super::context::SourceEdit;
use crate::adapter;

/// Re-indent continuation lines of a multi-line statement.
fn indent_continuations(text: &str, indent: &str) -> String {
    text.replace('\n', &format!("\n{indent}"))
}

/// Insert `text` as a statement immediately before `stmt`.
pub(crate) fn insert_before_statement(source: &str, stmt: Node, text: &str) -> SourceEdit {
    let indent = adapter::line_indent(source, stmt.start_byte());
    SourceEdit::insert(
        stmt.start_byte(),
        format!("{}\n{}", indent_continuations(text, indent), indent),
    )
}

/// Insert `text` as a statement on a fresh line after `stmt`.
pub(crate) fn insert_after_statement(source: &str, stmt: Node, text: &str) -> SourceEdit {
    let indent = adapter::line_indent(source, stmt.start_byte());
    SourceEdit::insert(
        stmt.end_byte(),
        format!("\n{}{}", indent, indent_continuations(text, indent)),
    )
}

/// Insert `text` as the first statement of a block. A comment-only block
/// anchors on the comment; the brace rewrite is reserved for blocks with
/// nothing inside.
pub(crate) fn insert_as_first_statement(source: &str, block: Node, text: &str) -> SourceEdit {
    match adapter::statements(block)
        .first()
        .copied()
        .or_else(|| block.named_child(0))
    {
        Some(first) => insert_before_statement(source, first, text),
        None => insert_into_empty_braces(source, block, text),
    }
}

/// Insert `text` as the last statement of a block.
pub(crate) fn append_to_block(source: &str, block: Node, text: &str) -> SourceEdit {
    match adapter::statements(block)
        .last()
        .copied()
        .or_else(|| last_named_child(block))
    {
        Some(last) => insert_after_statement(source, last, text),
        None => insert_into_empty_braces(source, block, text),
    }
}

fn last_named_child(node: Node) -> Option<Node> {
    match node.named_child_count() {
        0 => None,
        n => node.named_child(n - 1),
    }
}

/// Insert `text` before the first statement at or past `offset`, appending
/// last when none qualifies.
pub(crate) fn anchored_insert(source: &str, block: Node, offset: usize, text: &str) -> SourceEdit {
    match adapter::statements(block)
        .into_iter()
        .find(|s| s.start_byte() >= offset)
    {
        Some(stmt) => insert_before_statement(source, stmt, text),
        None => append_to_block(source, block, text),
    }
}

/// Insert `text` as the first member of a type body.
pub(crate) fn insert_first_member(source: &str, ty: Node, text: &str) -> SourceEdit {
    match adapter::first_member(ty) {
        Some(member) => insert_before_statement(source, member, text),
        None => match adapter::type_body(ty) {
            Some(body) => insert_into_empty_braces(source, body, text),
            None => SourceEdit::insert(ty.end_byte(), text.to_string()),
        },
    }
}

/// Rewrite the interior of an empty brace pair to hold one statement.
pub(crate) fn insert_into_empty_braces(source: &str, braced: Node, text: &str) -> SourceEdit {
    let outer_indent = adapter::line_indent(source, braced.start_byte());
    let inner_indent = format!("{outer_indent}{INDENT_UNIT}");
    SourceEdit::replace(
        braced.start_byte() + 1,
        braced.end_byte().saturating_sub(1),
        format!(
            "\n{}{}\n{}",
            inner_indent,
            indent_continuations(text, &inner_indent),
            outer_indent
        ),
    )
}

/// Delete a whole statement, taking its line along when it owns the line.
pub(crate) fn deletion_edit(source: &str, stmt: Node) -> SourceEdit {
    let (start, end) = adapter::statement_deletion_range(source, stmt);
    SourceEdit::delete(start, end)
}

/// One edit adding every import in `paths` that is not already present.
/// Imports land after the last existing import, after the package
/// declaration, or at the top of the file, in that order of preference.
pub(crate) fn import_insert_edit(
    root: Node,
    source: &str,
    paths: &[String],
) -> Option<SourceEdit> {
    let existing: Vec<String> = adapter::imports(root)
        .into_iter()
        .map(|i| adapter::import_path(i, source))
        .collect();
    let needed: Vec<&String> = paths.iter().filter(|p| !existing.contains(*p)).collect();
    if needed.is_empty() {
        return None;
    }

    let statements: Vec<String> = needed.iter().map(|p| format!("import {p};")).collect();
    let imports = adapter::imports(root);
    if let Some(last) = imports.last() {
        return Some(SourceEdit::insert(
            last.end_byte(),
            format!("\n{}", statements.join("\n")),
        ));
    }
    if let Some(package) = adapter::package_declaration(root) {
        return Some(SourceEdit::insert(
            package.end_byte(),
            format!("\n\n{}", statements.join("\n")),
        ));
    }
    Some(SourceEdit::insert(0, format!("{}\n\n", statements.join("\n"))))
}
