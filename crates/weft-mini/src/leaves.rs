/*
 * leaves.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::MiniLocation;
use crate::lexer::{MiniToken, is_sounding_word};
use logos::Logos;
use weft_source_map::{OffsetIndex, SourceOffset};

/// Locate every leaf of the mini-notation in `code`.
///
/// `code` is the literal text as it appears in the host source, quotes
/// included, and `code[0]` sits at character `offset` of the host source.
/// The returned spans are in host character offsets, in source order.
pub fn leaf_locations(code: &str, offset: SourceOffset) -> Vec<MiniLocation> {
    let index = OffsetIndex::new(code);
    let mut leaves = Vec::new();

    // Byte end of the operator immediately preceding the current token
    let mut operator_end: Option<usize> = None;
    // Nesting depth of a group being skipped (euclid arguments, operands)
    let mut skip_depth = 0usize;

    for (token, range) in MiniToken::lexer(code).spanned() {
        let Ok(token) = token else {
            operator_end = None;
            continue;
        };

        if skip_depth > 0 {
            if token.is_open() {
                skip_depth += 1;
            } else if token.is_close() {
                skip_depth -= 1;
            }
            continue;
        }

        let is_operand = operator_end == Some(range.start);
        operator_end = None;

        match token {
            MiniToken::OpenEuclid => skip_depth = 1,
            t if t.is_open() && is_operand => skip_depth = 1,
            t if t.is_operator() => operator_end = Some(range.end),
            MiniToken::Word if !is_operand && is_sounding_word(&code[range.clone()]) => {
                leaves.push(index.span(range).shifted(offset));
            }
            _ => {}
        }
    }

    leaves
}

/// Locate the leaves of every double-quoted region inside `code`.
///
/// Used for host languages (Tidal) that embed mini-notation in their own
/// string literals. Quotes pair up in order; an unterminated trailing quote
/// is ignored.
pub fn quoted_regions(code: &str, offset: SourceOffset) -> Vec<MiniLocation> {
    let index = OffsetIndex::new(code);
    let quotes: Vec<usize> = MiniToken::lexer(code)
        .spanned()
        .filter(|(token, _)| *token == Ok(MiniToken::Quote))
        .map(|(_, range)| range.start)
        .collect();

    quotes
        .chunks_exact(2)
        .flat_map(|pair| {
            let (open, close) = (pair[0], pair[1]);
            leaf_locations(&code[open..=close], offset + index.char_offset(open))
        })
        .collect()
}
