/*
 * rules.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Precedence-ordered rule selection.
//!
//! [`select_rule`] is the dispatch table of the transpiler: given the shape
//! of one node it picks at most one rewrite, first match wins.

use crate::languages::TIDAL_TAG;
use crate::registry::LanguageRegistry;
use crate::syntax::{CallParts, Callee, NodeKind, Quote};
use crate::widgets::NativeWidget;
use tree_sitter::Node;

/// Identifier of the asynchronous sample loader.
pub const SAMPLES_LOADER: &str = "samples";

/// The rewrite chosen for one node.
#[derive(Debug, Clone)]
pub enum Rule<'tree, 's> {
    /// ``tag`...` `` with a registered tag
    SubLanguage { tag: &'s str, template: Node<'tree> },
    /// ``tidal`...` ``
    Tidal { template: Node<'tree> },
    /// An untagged template literal
    TemplatePattern,
    /// A double-quoted string literal
    StringPattern,
    /// `slider(...)`, `toggle(...)`, `radio(...)`
    NativeWidget {
        widget: NativeWidget,
        parts: CallParts<'tree>,
    },
    /// `expr.method(...)` with a registered widget method
    WidgetMethod {
        method: &'s str,
        parts: CallParts<'tree>,
    },
    /// `samples(...)` outside an `await`
    AwaitSamples { parts: CallParts<'tree> },
    /// `label: expression`
    Label {
        label: &'s str,
        expression: Node<'tree>,
    },
}

impl Rule<'_, '_> {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::SubLanguage { .. } => "sub-language",
            Rule::Tidal { .. } => "tidal",
            Rule::TemplatePattern => "template-pattern",
            Rule::StringPattern => "string-pattern",
            Rule::NativeWidget { .. } => "native-widget",
            Rule::WidgetMethod { .. } => "widget-method",
            Rule::AwaitSamples { .. } => "await-samples",
            Rule::Label { .. } => "label",
        }
    }
}

/// Pick the rewrite for a node of shape `kind`, if any applies.
pub fn select_rule<'tree, 's>(
    kind: NodeKind<'tree, 's>,
    registry: &LanguageRegistry,
) -> Option<Rule<'tree, 's>> {
    match kind {
        NodeKind::TaggedTemplate {
            tag: Some(tag),
            template,
        } if registry.sub_language(tag).is_some() => Some(Rule::SubLanguage { tag, template }),
        NodeKind::TaggedTemplate {
            tag: Some(TIDAL_TAG),
            template,
        } => Some(Rule::Tidal { template }),
        NodeKind::TaggedTemplate { .. } => None,
        NodeKind::TemplateString { tagged: false } => Some(Rule::TemplatePattern),
        NodeKind::TemplateString { tagged: true } => None,
        NodeKind::StringLiteral {
            quote: Quote::Double,
        } => Some(Rule::StringPattern),
        NodeKind::StringLiteral {
            quote: Quote::Single,
        } => None,
        NodeKind::Call {
            callee: Callee::Identifier(name),
            parts,
            awaited,
        } => match NativeWidget::from_callee(name) {
            Some(widget) if !parts.values.is_empty() => {
                Some(Rule::NativeWidget { widget, parts })
            }
            _ if name == SAMPLES_LOADER && !awaited => Some(Rule::AwaitSamples { parts }),
            _ => None,
        },
        NodeKind::Call {
            callee: Callee::Member { property },
            parts,
            ..
        } if registry.is_widget_method(property) => Some(Rule::WidgetMethod {
            method: property,
            parts,
        }),
        NodeKind::Call { .. } => None,
        NodeKind::LabeledStatement {
            label,
            expression: Some(expression),
        } => Some(Rule::Label { label, expression }),
        NodeKind::LabeledStatement {
            expression: None, ..
        } => None,
        NodeKind::Other => None,
    }
}
