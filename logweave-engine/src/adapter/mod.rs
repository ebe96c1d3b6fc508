//! Source structure adapter: read-only queries over the parsed Java tree.
//!
//! This is the only place the engine inspects concrete syntax shape;
//! everything downstream works in terms of these queries.

pub mod classify;

use smallvec::SmallVec;
use tree_sitter::Node;

pub use classify::{classify_method, MethodKind};

pub(crate) const KIND_METHOD: &str = "method_declaration";
pub(crate) const KIND_CONSTRUCTOR: &str = "constructor_declaration";

const TYPE_KINDS: &[&str] = &["class_declaration", "enum_declaration", "interface_declaration"];
const BLOCK_KINDS: &[&str] = &["block", "constructor_body"];
const COMMENT_KINDS: &[&str] = &["line_comment", "block_comment"];

/// Node text, empty on encoding trouble.
pub fn node_text<'s>(node: Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

// ---- Enclosing-scope lookup ----

/// The method or constructor declaration containing `offset`, if any.
pub fn enclosing_method(root: Node<'_>, offset: usize) -> Option<Node<'_>> {
    let node = root.named_descendant_for_byte_range(offset, offset)?;
    enclosing_method_of(node)
}

/// The method or constructor declaration containing `node`, itself included.
pub fn enclosing_method_of(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node;
    loop {
        if current.kind() == KIND_METHOD || current.kind() == KIND_CONSTRUCTOR {
            return Some(current);
        }
        current = current.parent()?;
    }
}

/// The type declaration containing `offset`, if any.
pub fn enclosing_type(root: Node<'_>, offset: usize) -> Option<Node<'_>> {
    let node = root.named_descendant_for_byte_range(offset, offset)?;
    enclosing_type_of(node)
}

/// The type declaration containing `node`, itself included.
pub fn enclosing_type_of(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node;
    loop {
        if TYPE_KINDS.contains(&current.kind()) {
            return Some(current);
        }
        current = current.parent()?;
    }
}

/// The innermost statement block containing `offset`, if any.
pub fn enclosing_block(root: Node<'_>, offset: usize) -> Option<Node<'_>> {
    let mut current = root.named_descendant_for_byte_range(offset, offset)?;
    loop {
        if BLOCK_KINDS.contains(&current.kind()) {
            return Some(current);
        }
        current = current.parent()?;
    }
}

// ---- Declarations ----

pub fn type_name(ty: Node, source: &str) -> String {
    ty.child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

pub fn method_name(method: Node, source: &str) -> String {
    method
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

pub fn method_body(method: Node<'_>) -> Option<Node<'_>> {
    method.child_by_field_name("body")
}

pub fn parameter_count(method: Node) -> usize {
    match method.child_by_field_name("parameters") {
        Some(params) => {
            let mut cursor = params.walk();
            params
                .named_children(&mut cursor)
                .filter(|n| n.kind() == "formal_parameter" || n.kind() == "spread_parameter")
                .count()
        }
        None => 0,
    }
}

pub fn return_type_text<'s>(method: Node, source: &'s str) -> &'s str {
    method
        .child_by_field_name("type")
        .map(|n| node_text(n, source))
        .unwrap_or("")
}

pub fn is_void(method: Node, source: &str) -> bool {
    return_type_text(method, source) == "void"
}

/// The type body node (`class_body` and friends).
pub fn type_body(ty: Node<'_>) -> Option<Node<'_>> {
    ty.child_by_field_name("body")
}

/// Method and constructor declarations directly inside a type, in order.
pub fn methods(ty: Node<'_>) -> Vec<Node<'_>> {
    match type_body(ty) {
        Some(body) => {
            let mut cursor = body.walk();
            body.named_children(&mut cursor)
                .filter(|n| n.kind() == KIND_METHOD || n.kind() == KIND_CONSTRUCTOR)
                .collect()
        }
        None => Vec::new(),
    }
}

/// Type declarations anywhere in the tree, in document order.
pub fn types(root: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    for kind in TYPE_KINDS {
        let mut found = Vec::new();
        collect_descendants(root, kind, &mut found);
        out.extend(found);
    }
    out.sort_by_key(|n| n.start_byte());
    out
}

/// The first non-comment member of a type body.
pub fn first_member(ty: Node<'_>) -> Option<Node<'_>> {
    let body = type_body(ty)?;
    let mut cursor = body.walk();
    let member = body
        .named_children(&mut cursor)
        .find(|n| !COMMENT_KINDS.contains(&n.kind()));
    member
}

// ---- Fields ----

/// Field declarations directly inside a type.
pub fn fields(ty: Node<'_>) -> Vec<Node<'_>> {
    match type_body(ty) {
        Some(body) => {
            let mut cursor = body.walk();
            body.named_children(&mut cursor)
                .filter(|n| n.kind() == "field_declaration")
                .collect()
        }
        None => Vec::new(),
    }
}

/// Names declared by a field declaration (one per declarator).
pub fn field_declarator_names(field: Node, source: &str) -> SmallVec<[String; 4]> {
    let mut names = SmallVec::new();
    let mut cursor = field.walk();
    for child in field.named_children(&mut cursor) {
        if child.kind() == "variable_declarator" {
            if let Some(name) = child.child_by_field_name("name") {
                names.push(node_text(name, source).to_string());
            }
        }
    }
    names
}

/// The first field in the type declaring exactly `name`.
pub fn find_field<'t>(ty: Node<'t>, source: &str, name: &str) -> Option<Node<'t>> {
    fields(ty)
        .into_iter()
        .find(|f| field_declarator_names(*f, source).iter().any(|n| n == name))
}

// ---- Statements ----

/// Top-level statements of a block, comments excluded.
pub fn statements(block: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = block.walk();
    block
        .named_children(&mut cursor)
        .filter(|n| !COMMENT_KINDS.contains(&n.kind()))
        .collect()
}

/// The last top-level statement of the method body.
pub fn last_statement(method: Node<'_>) -> Option<Node<'_>> {
    statements(method_body(method)?).into_iter().last()
}

/// All catch clauses anywhere inside `node`.
pub fn catch_clauses(node: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    collect_descendants(node, "catch_clause", &mut out);
    out
}

/// Whether the catch clause body holds no statements.
pub fn is_empty_catch_block(clause: Node) -> bool {
    clause
        .child_by_field_name("body")
        .map(|body| statements(body).is_empty())
        .unwrap_or(true)
}

/// The exception parameter name of a catch clause.
pub fn catch_parameter_name(clause: Node, source: &str) -> String {
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if child.kind() == "catch_formal_parameter" {
            // The identifier follows the catch type; take the last one.
            let mut name = String::new();
            let mut inner = child.walk();
            for n in child.named_children(&mut inner) {
                if n.kind() == "identifier" {
                    name = node_text(n, source).to_string();
                }
            }
            return name;
        }
    }
    String::new()
}

/// Collect named descendants of a kind, in document order.
pub fn collect_descendants<'t>(node: Node<'t>, kind: &str, out: &mut Vec<Node<'t>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == kind {
            out.push(child);
        }
        collect_descendants(child, kind, out);
    }
}

/// Whether any identifier equal to `name` occurs under `node`.
pub fn has_identifier(node: Node, source: &str, name: &str) -> bool {
    if node.kind() == "identifier" && node_text(node, source) == name {
        return true;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if has_identifier(child, source, name) {
            return true;
        }
    }
    false
}

// ---- Cursor queries ----

/// Whether the cursor sits inside a method or constructor.
pub fn is_cursor_in_method(root: Node, offset: usize) -> bool {
    enclosing_method(root, offset).is_some()
}

/// Whether the selection sits inside a statement block, i.e. a position
/// where a statement can be inserted.
pub fn is_valid_insert_position(root: Node, offset: usize, length: usize) -> bool {
    let end = offset.saturating_add(length);
    match root.named_descendant_for_byte_range(offset, end) {
        Some(mut node) => loop {
            if BLOCK_KINDS.contains(&node.kind()) {
                return true;
            }
            match node.parent() {
                Some(parent) => node = parent,
                None => return false,
            }
        },
        None => false,
    }
}

/// The local variable under the cursor, as (name, declaration statement).
pub fn cursor_on_variable<'t>(
    root: Node<'t>,
    source: &str,
    offset: usize,
) -> Option<(String, Node<'t>)> {
    let node = root.named_descendant_for_byte_range(offset, offset)?;
    if node.kind() != "identifier" {
        return None;
    }
    let declarator = node.parent()?;
    if declarator.kind() != "variable_declarator" {
        return None;
    }
    if declarator.child_by_field_name("name") != Some(node) {
        return None;
    }
    let declaration = declarator.parent()?;
    if declaration.kind() != "local_variable_declaration" {
        return None;
    }
    Some((node_text(node, source).to_string(), declaration))
}

// ---- Imports ----

/// Import declarations of the compilation unit, in order.
pub fn imports(root: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .filter(|n| n.kind() == "import_declaration")
        .collect()
}

/// The dotted path of an import declaration, `static` and `;` stripped.
pub fn import_path(import: Node, source: &str) -> String {
    let text = node_text(import, source);
    let path = text.trim_start_matches("import").trim_start();
    let path = path.strip_prefix("static ").unwrap_or(path);
    path.trim().trim_end_matches(';').trim().to_string()
}

/// The package declaration, if present.
pub fn package_declaration(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    let decl = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_declaration");
    decl
}

// ---- Text geometry ----

/// Byte offset of the start of the line containing `byte`.
pub fn line_start(source: &str, byte: usize) -> usize {
    source[..byte].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Leading whitespace of the line containing `byte`.
pub fn line_indent(source: &str, byte: usize) -> &str {
    let start = line_start(source, byte);
    let line = &source[start..];
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// The byte range deleting a whole statement including its line when the
/// statement owns the line.
pub fn statement_deletion_range(source: &str, stmt: Node) -> (usize, usize) {
    let mut start = stmt.start_byte();
    let ls = line_start(source, start);
    if source[ls..start].chars().all(|c| c == ' ' || c == '\t') {
        start = ls;
    }
    let mut end = stmt.end_byte();
    let rest = &source[end..];
    match rest.find('\n') {
        Some(nl) if rest[..nl].chars().all(|c| c == ' ' || c == '\t' || c == '\r') => {
            end += nl + 1;
        }
        None if rest.chars().all(|c| c == ' ' || c == '\t' || c == '\r') => {
            end = source.len();
        }
        _ => {}
    }
    (start, end)
}
