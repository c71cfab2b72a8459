//! Line indexing: decoded text -> ordered key -> line mapping.
//!
//! Responsibilities:
//!
//! - split on line terminators (`\n` and `\r\n` both accepted)
//! - drop entries that are the empty string after splitting
//! - assign surviving lines contiguous keys starting at 0
//!
//! Pure and total: any string is a legal input, and the empty string yields an
//! empty mapping.

use crate::domain::LineIndex;

/// Index output: the mapping plus split bookkeeping.
#[derive(Debug, Clone)]
pub struct IndexedText {
    pub index: LineIndex,
    /// Total entries produced by splitting, before the empty filter.
    pub lines_read: usize,
    pub lines_kept: usize,
    pub blanks_dropped: usize,
}

/// Split `text` into non-empty lines and assign each a sequential key.
///
/// An entry that is empty after splitting (a blank line, or a trailing-newline
/// artifact) is dropped without being assigned a key. Whitespace-only lines
/// are kept as-is.
pub fn index_lines(text: &str) -> IndexedText {
    let mut kept = Vec::new();
    let mut lines_read = 0usize;
    let mut blanks_dropped = 0usize;

    for line in text.lines() {
        lines_read += 1;
        if line.is_empty() {
            blanks_dropped += 1;
            continue;
        }
        kept.push(line.to_string());
    }

    let lines_kept = kept.len();
    IndexedText {
        index: LineIndex::from_lines(kept),
        lines_read,
        lines_kept,
        blanks_dropped,
    }
}
