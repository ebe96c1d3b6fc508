//! Java source parsing via tree-sitter.

use logweave_core::errors::ParseError;
use tree_sitter::{Language, Node, Parser, Tree};

/// Parser for Java compilation units.
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_java::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Grammar {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse source code and produce a ParsedSource.
    pub fn parse(&mut self, source: &str) -> Result<ParsedSource, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Failed {
                message: "tree-sitter returned no tree".into(),
            })?;
        Ok(ParsedSource {
            source: source.to_string(),
            tree,
        })
    }
}

/// A parsed compilation unit: the tree plus the text it was parsed from.
pub struct ParsedSource {
    source: String,
    tree: Tree,
}

impl ParsedSource {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text_of(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Syntactic context a rendered template must parse in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// A statement inside a method body.
    Statement,
    /// A type body member (field or method declaration).
    Member,
    /// A whole compilation unit (import statements).
    CompilationUnit,
}

/// Check whether `text` parses cleanly as the given fragment kind.
///
/// The text is wrapped in a minimal synthetic compilation unit and parsed
/// with the real grammar, so anything accepted here is structurally
/// identical to hand-written code once spliced into the target buffer.
pub fn fragment_is_valid(text: &str, kind: FragmentKind) -> bool {
    let wrapped = match kind {
        FragmentKind::Statement => format!("class __Fragment {{ void __body() {{ {text} }} }}"),
        FragmentKind::Member => format!("class __Fragment {{ {text} }}"),
        FragmentKind::CompilationUnit => text.to_string(),
    };
    let mut parser = match JavaParser::new() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "fragment validation unavailable");
            return false;
        }
    };
    match parser.parse(&wrapped) {
        Ok(parsed) => !parsed.has_errors(),
        Err(_) => false,
    }
}
