//! Character spans into the document content.

use serde::{Deserialize, Serialize};

/// A contiguous range into the document text.
///
/// Offsets index into the markdown content string produced by the layout
/// analyzer. The invariant `offset + length <= content.len()` is validated
/// where spans are dereferenced, not on deserialization, so that one bad
/// span cannot reject an otherwise usable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start offset into the document content
    pub offset: usize,

    /// Number of characters covered
    pub length: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether `offset` falls strictly inside `(start, end)`.
    pub fn starts_strictly_within(&self, start: usize, end: usize) -> bool {
        self.offset > start && self.offset < end
    }
}
