use serde::Serialize;

use crate::shared::models::Span;

/// Replace `start..end` of the source with `replacement`
///
/// An empty range is an insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl TextEdit {
    pub fn replace(span: &Span, replacement: impl Into<String>) -> Self {
        Self {
            start: span.start_byte,
            end: span.end_byte,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            replacement: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }

    /// Two edits touch the same bytes (or insert at the same point)
    pub fn overlaps(&self, other: &TextEdit) -> bool {
        if self.is_insertion() && other.is_insertion() {
            return self.start == other.start;
        }
        self.start < other.end && other.start < self.end
    }
}
