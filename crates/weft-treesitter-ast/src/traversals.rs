/*
 * traversals.rs
 *
 * Copyright (c) 2025 Posit, PBC
 *
 * Generic traversal helpers for tree-sitter TreeCursor.
 *
 * These traversal functions work with any tree-sitter grammar, so the
 * transpiler and its tests can share the same walking logic.
 */

use tree_sitter::{Node, TreeCursor};

/// What the traversal should do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    /// Continue into the node's children
    Descend,
    /// Do not visit the node's children; continue with its next sibling
    Skip,
}

/// Pre-order, depth-first traversal of a tree-sitter tree.
///
/// Visits each node once, parents before children, siblings left to right.
/// The traversal never leaves the subtree rooted at the cursor's starting
/// node. The loop is iterative so deeply nested sources cannot overflow the
/// stack.
///
/// # Arguments
/// * `cursor` - A tree-sitter cursor positioned at the starting node
/// * `visitor` - Called for each node; its [`VisitAction`] controls descent
///
/// # Example
/// ```ignore
/// preorder_traverse(&mut tree.walk(), &mut |node| {
///     if node.kind() == "string" {
///         VisitAction::Skip
///     } else {
///         VisitAction::Descend
///     }
/// });
/// ```
pub fn preorder_traverse<'tree, F>(cursor: &mut TreeCursor<'tree>, visitor: &mut F)
where
    F: FnMut(Node<'tree>) -> VisitAction,
{
    let mut depth = 0usize;
    loop {
        let action = visitor(cursor.node());
        if action == VisitAction::Descend && cursor.goto_first_child() {
            depth += 1;
            continue;
        }

        // Climb until a sibling is available or we are back at the start
        loop {
            if depth == 0 {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            cursor.goto_parent();
            depth -= 1;
        }
    }
}
