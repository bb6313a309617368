/*
 * errors.rs
 *
 * Copyright (c) 2025 Posit, PBC
 *
 * Locating syntax errors in tree-sitter trees.
 */

use tree_sitter::Node;

/// Find the first `ERROR` or `MISSING` node in document order.
///
/// Returns `None` when the subtree rooted at `node` parsed cleanly.
pub fn first_error_node<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}
