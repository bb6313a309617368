//! Utility functions for working with source positions

use crate::types::{Location, SourceOffset, Span};
use std::ops::Range;

/// Converts between byte offsets and character offsets of one source text.
///
/// Pure-ASCII sources take a fast path where both units coincide.
#[derive(Debug, Clone)]
pub struct OffsetIndex {
    byte_len: usize,
    /// Byte position of every character, empty for ASCII sources
    char_starts: Vec<usize>,
}

impl OffsetIndex {
    pub fn new(source: &str) -> Self {
        let char_starts = if source.is_ascii() {
            Vec::new()
        } else {
            source.char_indices().map(|(byte, _)| byte).collect()
        };
        Self {
            byte_len: source.len(),
            char_starts,
        }
    }

    fn is_ascii(&self) -> bool {
        self.char_starts.is_empty()
    }

    /// Character offset of the character starting at (or containing) `byte`.
    ///
    /// Offsets past the end clamp to the character length.
    pub fn char_offset(&self, byte: usize) -> SourceOffset {
        if self.is_ascii() {
            return byte.min(self.byte_len);
        }
        self.char_starts.partition_point(|&start| start < byte)
    }

    /// Convert a byte range into a character span
    pub fn span(&self, bytes: Range<usize>) -> Span {
        Span::new(self.char_offset(bytes.start), self.char_offset(bytes.end))
    }

    /// Number of characters in the indexed source
    pub fn char_len(&self) -> usize {
        if self.is_ascii() {
            self.byte_len
        } else {
            self.char_starts.len()
        }
    }
}

/// Convert a character offset to a Location with row and column info
///
/// Returns None if the offset is out of bounds.
pub fn offset_to_location(source: &str, offset: SourceOffset) -> Option<Location> {
    let mut row = 0;
    let mut column = 0;
    let mut seen = 0;

    for ch in source.chars() {
        if seen == offset {
            break;
        }

        if ch == '\n' {
            row += 1;
            column = 0;
        } else {
            column += 1;
        }

        seen += 1;
    }

    if seen < offset {
        return None;
    }

    Some(Location {
        offset,
        row,
        column,
    })
}
