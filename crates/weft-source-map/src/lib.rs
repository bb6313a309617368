//! Source positions for weft
//!
//! Every position exchanged with editors is a [`SourceOffset`]: a character
//! (Unicode scalar value) index into the original source text. Parsers work
//! in bytes, so this crate also provides [`OffsetIndex`] to convert between
//! the two units, and [`Location`] for human-facing row/column reporting.
//!
//! # Example
//!
//! ```rust
//! use weft_source_map::*;
//!
//! let source = "// é\ns(\"bd\")";
//! let index = OffsetIndex::new(source);
//!
//! // The `"` before `bd` is byte 8 but character 7
//! assert_eq!(index.char_offset(8), 7);
//! assert_eq!(index.char_len(), 12);
//!
//! let loc = offset_to_location(source, 7).unwrap();
//! assert_eq!((loc.row, loc.column), (1, 2));
//! ```

pub mod types;
pub mod utils;

// Re-export main types
pub use types::{Location, SourceOffset, Span};
pub use utils::{OffsetIndex, offset_to_location};
