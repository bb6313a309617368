/*
 * rewrite.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Applying the selected rule to a node.

use crate::emit::{Emit, Splice};
use crate::languages::{PATTERN_CALL, TIDAL_TAG};
use crate::options::TranspileOptions;
use crate::registry::LanguageRegistry;
use crate::result::{WidgetDescriptor, WidgetKind};
use crate::rules::{Rule, select_rule};
use crate::syntax::{CallParts, SourceText, classify, first_quasi, is_member_safe};
use crate::widgets::{NativeWidget, WidgetCounters, method_widget_id, native_descriptor};
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;
use weft_mini::{MiniLocation, leaf_locations, quoted_regions};
use weft_treesitter_ast::VisitAction;

/// An absolute URL scheme such as `https://` or `github://`.
static URL_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());

/// Rewrites nodes one at a time and collects locations and widgets.
pub struct Rewriter<'a, 's> {
    source: &'a SourceText<'s>,
    registry: &'a LanguageRegistry,
    options: &'a TranspileOptions,
    pub splice: Splice,
    pub locations: Vec<MiniLocation>,
    pub widgets: Vec<WidgetDescriptor>,
    counters: WidgetCounters,
}

impl<'a, 's> Rewriter<'a, 's> {
    pub fn new(
        source: &'a SourceText<'s>,
        registry: &'a LanguageRegistry,
        options: &'a TranspileOptions,
    ) -> Self {
        Self {
            source,
            registry,
            options,
            splice: Splice::new(),
            locations: Vec::new(),
            widgets: Vec::new(),
            counters: WidgetCounters::default(),
        }
    }

    /// Rewrite `node` if a rule applies and decide whether to descend.
    pub fn visit(&mut self, node: Node<'_>) -> VisitAction {
        let Some(rule) = select_rule(classify(node, self.source), self.registry) else {
            return VisitAction::Descend;
        };
        tracing::trace!(
            rule = rule.name(),
            kind = node.kind(),
            offset = self.source.char_offset(node.start_byte()),
            "Matched rewrite rule"
        );

        match rule {
            Rule::SubLanguage { tag, template } => self.sub_language(node, tag, template),
            Rule::Tidal { template } => self.tidal(node, template),
            Rule::TemplatePattern => {
                let raw = first_quasi(node, self.source);
                self.pattern(node, raw, Emit::Str(raw.to_string()))
            }
            Rule::StringPattern => {
                let text = self.source.node_text(node);
                let value = text.get(1..text.len().saturating_sub(1)).unwrap_or_default();
                self.pattern(node, value, Emit::Source(node.byte_range()))
            }
            Rule::NativeWidget { widget, parts } => self.native_widget(widget, &parts),
            Rule::WidgetMethod { method, parts } => self.widget_method(method, &parts),
            Rule::AwaitSamples { parts } => self.await_samples(&parts),
            Rule::Label { label, expression } => self.label(node, label, expression),
        }
    }

    fn sub_language(&mut self, node: Node<'_>, tag: &str, template: Node<'_>) -> VisitAction {
        let registry = self.registry;
        let Some(language) = registry.sub_language(tag) else {
            return VisitAction::Descend;
        };
        let raw = first_quasi(template, self.source);
        let offset = self.source.char_offset(template.start_byte() + 1);
        if self.options.emit_locations {
            self.locations.extend(language.locations(raw, offset));
        }
        let callee = language.call_name().unwrap_or(tag);
        tracing::debug!(tag, callee, offset, "Rewriting sub-language literal");
        self.replace_with_literal_call(node, callee, Emit::Str(raw.to_string()), offset);
        VisitAction::Skip
    }

    fn tidal(&mut self, node: Node<'_>, template: Node<'_>) -> VisitAction {
        let raw = first_quasi(template, self.source);
        let offset = self.source.char_offset(template.start_byte() + 1);
        if self.options.emit_locations {
            self.locations.extend(quoted_regions(raw, offset));
        }
        tracing::debug!(offset, "Rewriting tidal literal");
        self.replace_with_literal_call(node, TIDAL_TAG, Emit::Str(raw.to_string()), offset);
        VisitAction::Skip
    }

    /// Shared by plain strings and untagged templates.
    fn pattern(&mut self, node: Node<'_>, value: &str, literal: Emit) -> VisitAction {
        if URL_SCHEME.is_match(value) {
            tracing::debug!(value, "Leaving URL literal untouched");
            return VisitAction::Descend;
        }

        let registry = self.registry;
        let start = self.source.char_offset(node.start_byte());
        let callee = match registry.default_language() {
            Some(language) => {
                if self.options.emit_locations {
                    self.locations
                        .extend(language.locations(&format!("[{value}]"), start));
                }
                language.call_name().unwrap_or(PATTERN_CALL)
            }
            None => {
                if self.options.emit_locations {
                    self.locations
                        .extend(leaf_locations(&format!("\"{value}\""), start));
                }
                PATTERN_CALL
            }
        };
        tracing::debug!(callee, offset = start, "Rewriting pattern literal");
        self.replace_with_literal_call(node, callee, literal, start);
        VisitAction::Skip
    }

    fn replace_with_literal_call(
        &mut self,
        node: Node<'_>,
        callee: &str,
        literal: Emit,
        offset: usize,
    ) {
        let call = Emit::call(
            Emit::Identifier(callee.to_string()),
            vec![literal, Emit::Number(offset)],
        );
        self.splice.replace(node.byte_range(), call);
    }

    fn native_widget(&mut self, widget: NativeWidget, parts: &CallParts<'_>) -> VisitAction {
        let index = self.counters.next(widget.kind().as_str());
        let Some(descriptor) = native_descriptor(widget, parts, self.source, index) else {
            return VisitAction::Descend;
        };
        tracing::debug!(id = %descriptor.id, value = ?descriptor.value, "Rewriting widget call");

        self.splice.replace(
            parts.call.byte_range(),
            Emit::prefixed_call(
                Emit::Identifier(widget.id_callee().to_string()),
                Emit::IdLiteral(descriptor.id.clone()),
                parts.inner_arguments(),
            ),
        );
        if self.options.emit_widgets {
            self.widgets.push(descriptor);
        }
        VisitAction::Skip
    }

    fn widget_method(&mut self, method: &str, parts: &CallParts<'_>) -> VisitAction {
        let index = self.counters.next(method);
        let id = method_widget_id(self.options.caller_id.as_deref(), method, index);
        let end = self.source.char_offset(parts.call.end_byte());
        tracing::debug!(id = %id, method, "Rewriting widget method call");

        self.splice.replace(
            parts.call.byte_range(),
            Emit::prefixed_call(
                Emit::Source(parts.function.byte_range()),
                Emit::IdLiteral(id.clone()),
                parts.inner_arguments(),
            ),
        );
        if self.options.emit_widgets {
            self.widgets.push(WidgetDescriptor {
                from: end,
                to: end,
                kind: WidgetKind::Method(method.to_string()),
                value: None,
                options: None,
                min: None,
                max: None,
                step: None,
                id,
                index: Some(index),
            });
        }
        VisitAction::Descend
    }

    fn await_samples(&mut self, parts: &CallParts<'_>) -> VisitAction {
        let range = parts.call.byte_range();
        let awaited = Emit::Await(Box::new(Emit::Source(range.clone())));
        let parenthesize = !await_needs_no_parens(parts.call);
        tracing::debug!(parenthesize, "Awaiting sample loader call");

        self.splice
            .replace(range, if parenthesize { awaited.parens() } else { awaited });
        VisitAction::Descend
    }

    fn label(&mut self, node: Node<'_>, label: &str, expression: Node<'_>) -> VisitAction {
        let mut object = Emit::Source(expression.byte_range());
        if !is_member_safe(expression.kind()) {
            object = object.parens();
        }
        tracing::debug!(label, "Rewriting labeled statement");

        self.splice.replace(
            node.start_byte()..expression.end_byte(),
            Emit::method(object, "p", vec![Emit::Str(label.to_string())]),
        );
        VisitAction::Descend
    }
}

/// Parents in which `await call` can stand without parentheses.
fn await_needs_no_parens(call: Node<'_>) -> bool {
    let Some(parent) = call.parent() else {
        return false;
    };
    match parent.kind() {
        "expression_statement" => parent
            .parent()
            .is_none_or(|grandparent| grandparent.kind() != "labeled_statement"),
        "arguments" | "array" | "variable_declarator" | "parenthesized_expression"
        | "return_statement" => true,
        _ => false,
    }
}
