/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for transpilation.

use thiserror::Error;
use weft_source_map::SourceOffset;

/// Unrecoverable transpilation failures.
///
/// No partial output accompanies an error; callers keep their previous
/// result and report the failure.
#[derive(Debug, Error)]
pub enum TranspileError {
    /// The JavaScript grammar could not be loaded into the parser.
    #[error("Failed to load JavaScript grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// The source is not syntactically valid JavaScript.
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        offset: SourceOffset,
        line: usize,
        column: usize,
    },

    /// The program ends in something that cannot be returned.
    #[error(
        "Unexpected {kind} at line {line}, column {column}: the last statement must be an expression"
    )]
    TrailingStatement {
        kind: String,
        offset: SourceOffset,
        line: usize,
        column: usize,
    },
}

impl TranspileError {
    /// Character offset the error points at, when it has one.
    pub fn offset(&self) -> Option<SourceOffset> {
        match self {
            TranspileError::Grammar(_) => None,
            TranspileError::Parse { offset, .. }
            | TranspileError::TrailingStatement { offset, .. } => Some(*offset),
        }
    }

    /// Short description without the position prefix, for diagnostic labels.
    pub fn label(&self) -> String {
        match self {
            TranspileError::Grammar(err) => err.to_string(),
            TranspileError::Parse { message, .. } => message.clone(),
            TranspileError::TrailingStatement { kind, .. } => {
                format!("expected an expression, found {}", kind.replace('_', " "))
            }
        }
    }
}

/// Result type for transpile operations.
pub type TranspileResult<T> = Result<T, TranspileError>;
