/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Leaf locations for mini-notation.
//!
//! Mini-notation is the compact rhythm grammar embedded in string literals
//! (`"bd [hh hh] <sn cp>*2"`). Editors highlight the steps that are currently
//! sounding, so the transpiler needs the source span of every *leaf*: each
//! step word that produces an event.
//!
//! This crate does not evaluate patterns. It tokenizes the notation with
//! [`logos`] and decides, token by token, which words are leaves:
//!
//! - step words (`bd`, `c4`, `0.25`, `bd:3`, `é`) are leaves
//! - rests (`~`, `-`) and structural runs (`.`, `_`) are not
//! - operator operands (`*2`, `/<2 4>`, `@3`, `!`, `?0.2`, `%4`) are not
//! - euclid argument groups (`(3,8,2)`) are not
//!
//! Extraction never fails: characters the lexer does not recognise are
//! skipped, so half-typed notation still yields the leaves that exist.

pub mod leaves;
pub mod lexer;

pub use leaves::{leaf_locations, quoted_regions};
pub use lexer::MiniToken;

/// Source span of one leaf, in character offsets of the host source
pub type MiniLocation = weft_source_map::Span;
