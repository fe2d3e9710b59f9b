//! Selection ranges.

use serde::{Deserialize, Serialize};

/// A selection range inside the document.
///
/// Presence or absence of a range is the signal the bridge uses to derive
/// focus and blur; an absent range means the editor holds no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub index: usize,
    pub length: usize,
}

impl Range {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// A collapsed range (caret position).
    pub fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }

    pub fn is_caret(&self) -> bool {
        self.length == 0
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    /// Clamp the range into a document of `doc_len` characters.
    ///
    /// The engine keeps a trailing newline, so the last addressable index is
    /// `doc_len - 1`. Used when re-applying a remembered selection after the
    /// document has been replaced and may have shrunk.
    pub fn clamped(&self, doc_len: usize) -> Self {
        let max_index = doc_len.saturating_sub(1);
        let index = self.index.min(max_index);
        let length = self.length.min(max_index - index);
        Self { index, length }
    }
}
