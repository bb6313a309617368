/*
 * walker.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::emit::Splice;
use crate::options::TranspileOptions;
use crate::registry::LanguageRegistry;
use crate::result::WidgetDescriptor;
use crate::rewrite::Rewriter;
use crate::syntax::SourceText;
use tree_sitter::Tree;
use weft_mini::MiniLocation;
use weft_treesitter_ast::preorder_traverse;

/// Everything one pass over the tree produced.
#[derive(Debug)]
pub struct Walk {
    pub splice: Splice,
    pub locations: Vec<MiniLocation>,
    pub widgets: Vec<WidgetDescriptor>,
}

/// Visit every node of `tree` once, in source order, outer before inner.
///
/// A node whose rewrite folds its children into literal arguments is not
/// descended into, so its descendants produce no locations or widgets.
pub fn walk(
    tree: &Tree,
    source: &SourceText<'_>,
    registry: &LanguageRegistry,
    options: &TranspileOptions,
) -> Walk {
    let mut rewriter = Rewriter::new(source, registry, options);
    preorder_traverse(&mut tree.walk(), &mut |node| rewriter.visit(node));

    Walk {
        splice: rewriter.splice,
        locations: rewriter.locations,
        widgets: rewriter.widgets,
    }
}
