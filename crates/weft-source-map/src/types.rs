//! Core types for source positions

use serde::{Deserialize, Serialize};

/// A character index into the original source text.
///
/// Offsets count Unicode scalar values, never bytes and never line/column
/// pairs, so consumers can slice the original string directly.
pub type SourceOffset = usize;

/// A half-open `[start, end)` range of character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: SourceOffset,
    /// End offset (exclusive)
    pub end: SourceOffset,
}

impl Span {
    pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
        Self { start, end }
    }

    /// Shift both ends of the span by `delta` characters
    pub fn shifted(self, delta: SourceOffset) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A position in source text (0-indexed), for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Character offset from start of source
    pub offset: SourceOffset,
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_shifted() {
        let span = Span::new(1, 3).shifted(10);
        assert_eq!(span, Span::new(11, 13));
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(4, 4).is_empty());
        assert!(!Span::new(4, 5).is_empty());
    }

    #[test]
    fn test_span_serialization() {
        let json = serde_json::to_string(&Span::new(3, 5)).unwrap();
        assert_eq!(json, r#"{"start":3,"end":5}"#);

        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Span::new(3, 5));
    }

    #[test]
    fn test_location_ordering() {
        let loc1 = Location {
            offset: 0,
            row: 0,
            column: 0,
        };
        let loc2 = Location {
            offset: 5,
            row: 0,
            column: 5,
        };
        let loc3 = Location {
            offset: 10,
            row: 1,
            column: 0,
        };

        assert!(loc1 < loc2);
        assert!(loc2 < loc3);
    }
}
