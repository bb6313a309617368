/*
 * finalize.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Return injection, the empty-program fallback and async wrapping.

use crate::emit::Splice;
use crate::error::{TranspileError, TranspileResult};
use crate::options::TranspileOptions;
use crate::syntax::{SourceText, top_level_statements};
use tree_sitter::{Node, Tree};

/// Expression the empty program evaluates to.
pub const SILENCE: &str = "silence";

/// Serialize the rewritten program.
pub fn finalize(
    tree: &Tree,
    source: &SourceText<'_>,
    splice: &Splice,
    options: &TranspileOptions,
) -> TranspileResult<String> {
    let text = source.text;
    let statements = top_level_statements(tree.root_node());

    let body = match statements.last() {
        None => {
            tracing::warn!("Program has no statements; evaluating to {SILENCE}");
            let mut body = splice.render(text, 0..text.len());
            if body.trim().is_empty() {
                body.clear();
            } else if !body.ends_with('\n') {
                body.push('\n');
            }
            if options.add_return {
                body.push_str("return ");
            }
            body.push_str(SILENCE);
            body.push(';');
            body
        }
        Some(last) if options.add_return => {
            ensure_returnable(*last, source)?;
            let start = last.start_byte();
            let mut body = splice.render(text, 0..start);
            body.push_str("return ");
            body.push_str(&splice.render(text, start..text.len()));
            body
        }
        Some(_) => splice.render(text, 0..text.len()),
    };

    if options.wrap_async {
        Ok(format!("(async () => {{\n{body}\n}})()"))
    } else {
        Ok(body)
    }
}

fn ensure_returnable(statement: Node<'_>, source: &SourceText<'_>) -> TranspileResult<()> {
    let returnable = match statement.kind() {
        "expression_statement" => true,
        "labeled_statement" => statement
            .child_by_field_name("body")
            .is_some_and(|body| body.kind() == "expression_statement"),
        _ => false,
    };
    if returnable {
        return Ok(());
    }

    let (line, column) = source.line_column(statement.start_byte());
    Err(TranspileError::TrailingStatement {
        kind: statement.kind().to_string(),
        offset: source.char_offset(statement.start_byte()),
        line,
        column,
    })
}
