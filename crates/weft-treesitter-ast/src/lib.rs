/*
 * lib.rs
 *
 * Copyright (c) 2025 Posit, PBC
 *
 * weft-treesitter-ast: Generic tree-sitter utilities for weft.
 *
 * This crate provides shared infrastructure for working with tree-sitter
 * parse trees:
 *
 * - Pre-order traversal where the visitor decides whether to descend
 * - Lookup of the first error or missing node of a tree
 */

pub mod errors;
pub mod traversals;

// Re-export commonly used items at crate root
pub use errors::first_error_node;
pub use traversals::{VisitAction, preorder_traverse};
