//! Operation context and batched source edits.

use tree_sitter::{Node, Tree};

use logweave_core::errors::OpError;

use crate::adapter;
use crate::parser::ParsedSource;

/// Per-invocation bundle of parsed tree, selection, and text buffer.
/// Owned by the caller; the engine only borrows it.
pub struct OperationContext<'s> {
    pub source: &'s str,
    tree: &'s Tree,
    pub offset: usize,
    pub length: usize,
    method: Option<Node<'s>>,
}

impl<'s> OperationContext<'s> {
    pub fn new(parsed: &'s ParsedSource, offset: usize, length: usize) -> Self {
        Self {
            source: parsed.source(),
            tree: parsed.tree(),
            offset,
            length,
            method: None,
        }
    }

    /// Pre-resolve the selected method instead of deriving it from the
    /// offset.
    pub fn with_method(mut self, method: Node<'s>) -> Self {
        self.method = Some(method);
        self
    }

    pub fn root(&self) -> Node<'s> {
        self.tree.root_node()
    }

    pub(crate) fn selected_method(&self) -> Result<Node<'s>, OpError> {
        if let Some(method) = self.method {
            return Ok(method);
        }
        adapter::enclosing_method(self.root(), self.offset)
            .ok_or(OpError::NoEnclosingMethod { offset: self.offset })
    }

    pub(crate) fn selected_type(&self) -> Result<Node<'s>, OpError> {
        if let Some(method) = self.method {
            if let Some(ty) = adapter::enclosing_type_of(method) {
                return Ok(ty);
            }
        }
        adapter::enclosing_type(self.root(), self.offset)
            .ok_or(OpError::NoEnclosingType { offset: self.offset })
    }
}

/// A single replacement in the source buffer. `start == end` is an
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl SourceEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn delete(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: String::new(),
        }
    }
}

/// Informational no-op conditions. Reported alongside edits, never raised
/// as failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoggerAlreadyDeclared,
    NoEligibleMethods,
    NoConsoleCalls,
    ConventionUnchanged,
    TemplateMissing { key: String },
}

/// A batch of edits plus notices, applied atomically.
#[derive(Debug, Clone, Default)]
pub struct EditSet {
    edits: Vec<SourceEdit>,
    notices: Vec<Notice>,
}

impl EditSet {
    pub fn from_edits(edits: Vec<SourceEdit>) -> Self {
        Self {
            edits,
            notices: Vec::new(),
        }
    }

    pub fn with_notice(notice: Notice) -> Self {
        Self {
            edits: Vec::new(),
            notices: vec![notice],
        }
    }

    pub fn push_edit(&mut self, edit: SourceEdit) {
        self.edits.push(edit);
    }

    pub fn extend_edits(&mut self, edits: impl IntoIterator<Item = SourceEdit>) {
        self.edits.extend(edits);
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn merge(&mut self, other: EditSet) {
        self.edits.extend(other.edits);
        self.notices.extend(other.notices);
    }

    pub fn edits(&self) -> &[SourceEdit] {
        &self.edits
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply the whole batch to `source`. Overlapping ranges reject the
    /// entire batch; nothing is ever half-applied.
    ///
    /// Insertions at the same position land in push order: the edit pushed
    /// first ends up first in the text.
    pub fn apply(&self, source: &str) -> Result<String, OpError> {
        let mut indexed: Vec<(usize, &SourceEdit)> = self.edits.iter().enumerate().collect();
        indexed.sort_by_key(|(i, e)| (e.start, *i));

        let mut prev_end = 0usize;
        for (_, edit) in &indexed {
            if edit.start < prev_end || edit.end < edit.start || edit.end > source.len() {
                return Err(OpError::OverlappingEdits);
            }
            prev_end = prev_end.max(edit.end);
        }

        let mut out = source.to_string();
        for (_, edit) in indexed.iter().rev() {
            out.replace_range(edit.start..edit.end, &edit.text);
        }
        Ok(out)
    }
}
