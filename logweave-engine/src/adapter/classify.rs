//! Method-shape classification heuristics.
//!
//! Name- and shape-based only: prefix, parameter count, return-type shape,
//! single-statement body. Each predicate is independently usable; the
//! tagged [`MethodKind`] is what whole-class operations consume.

use tree_sitter::Node;

use super::{is_void, method_body, method_name, parameter_count, statements, KIND_CONSTRUCTOR};

/// Shape classification of a method declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Constructor,
    Getter,
    Setter,
    ToString,
    HashCode,
    Equals,
    Plain,
}

pub fn classify_method(method: Node, source: &str) -> MethodKind {
    if method.kind() == KIND_CONSTRUCTOR {
        return MethodKind::Constructor;
    }
    let name = method_name(method, source);
    let params = parameter_count(method);
    if name == "toString" && params == 0 {
        MethodKind::ToString
    } else if name == "hashCode" && params == 0 {
        MethodKind::HashCode
    } else if name == "equals" && params == 1 {
        MethodKind::Equals
    } else if is_getter(method, source) {
        MethodKind::Getter
    } else if is_setter(method, source) {
        MethodKind::Setter
    } else {
        MethodKind::Plain
    }
}

/// `getX()`/`isX()`: no parameters, non-void return, single-return body.
pub fn is_getter(method: Node, source: &str) -> bool {
    let name = method_name(method, source);
    let prefixed = (name.starts_with("get") && name.len() > 3)
        || (name.starts_with("is") && name.len() > 2);
    prefixed
        && parameter_count(method) == 0
        && !is_void(method, source)
        && has_single_statement_body(method, "return_statement")
}

/// `setX(v)`: one parameter, void return, single-statement body.
pub fn is_setter(method: Node, source: &str) -> bool {
    let name = method_name(method, source);
    name.starts_with("set")
        && name.len() > 3
        && parameter_count(method) == 1
        && is_void(method, source)
        && has_single_statement_body(method, "expression_statement")
}

pub fn is_to_string(method: Node, source: &str) -> bool {
    classify_method(method, source) == MethodKind::ToString
}

pub fn is_hash_code(method: Node, source: &str) -> bool {
    classify_method(method, source) == MethodKind::HashCode
}

pub fn is_equals(method: Node, source: &str) -> bool {
    classify_method(method, source) == MethodKind::Equals
}

fn has_single_statement_body(method: Node, kind: &str) -> bool {
    match method_body(method) {
        Some(body) => {
            let stmts = statements(body);
            stmts.len() == 1 && stmts[0].kind() == kind
        }
        None => false,
    }
}
