//! Fix model: buffered text edits.
//!
//! Rules never mutate source text. They hand single-point insertion
//! requests to a [`FixEngine`]; the buffering engine collects
//! [`TextEdit`]s and the host materializes them once the pass is over.
//! Nothing in a pass re-reads positions after requesting an edit.

use lineup_ir::{Span, TokenIdx, TokenView};

/// A single text edit: an insertion when the span is empty, a replacement
/// otherwise.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextEdit {
    /// The span to replace.
    pub span: Span,
    /// The replacement text.
    pub new_text: String,
}

impl TextEdit {
    /// Insert `text` at a byte offset.
    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        TextEdit {
            span: Span::point(offset),
            new_text: text.into(),
        }
    }

    /// Replace the text under `span`.
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: text.into(),
        }
    }

    /// Check if this edit inserts without removing anything.
    pub fn is_insert(&self) -> bool {
        self.span.is_empty()
    }
}

/// Receiver for corrective edits requested by rules.
pub trait FixEngine {
    /// Request a line break immediately after the token at `pos`.
    fn insert_line_break_after(&mut self, view: &TokenView<'_>, pos: TokenIdx);
}

/// Buffering fix engine.
///
/// `apply` materializes the buffered edits left to right; edit spans must
/// not overlap (an edit starting inside already-consumed text is dropped,
/// keeping the earlier edit).
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    edits: Vec<TextEdit>,
}

impl EditBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        EditBuffer::default()
    }

    /// Buffer an edit.
    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    /// The buffered edits, in request order.
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Number of buffered edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Check if no edits were requested.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply all buffered edits to `source`, in ascending position order.
    pub fn apply(&self, source: &str) -> String {
        let mut ordered: Vec<&TextEdit> = self.edits.iter().collect();
        ordered.sort_by_key(|edit| (edit.span.start, edit.span.end));

        let inserted: usize = self.edits.iter().map(|e| e.new_text.len()).sum();
        let mut out = String::with_capacity(source.len() + inserted);
        let mut cursor = 0usize;
        for edit in ordered {
            let range = edit.span.to_range();
            if range.start < cursor {
                continue;
            }
            out.push_str(&source[cursor..range.start]);
            out.push_str(&edit.new_text);
            cursor = range.end;
        }
        out.push_str(&source[cursor..]);
        out
    }
}

impl FixEngine for EditBuffer {
    fn insert_line_break_after(&mut self, view: &TokenView<'_>, pos: TokenIdx) {
        self.push(TextEdit::insert(view.span_of(pos).end, "\n"));
    }
}
