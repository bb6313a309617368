/*
 * widgets.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Widget descriptors and identifiers.

use crate::result::{WidgetDescriptor, WidgetKind};
use crate::syntax::{CallParts, SourceText};
use std::collections::HashMap;
use tree_sitter::Node;

/// The controls recognised as plain function calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeWidget {
    Slider,
    Toggle,
    Radio,
}

impl NativeWidget {
    pub fn from_callee(name: &str) -> Option<Self> {
        match name {
            "slider" => Some(NativeWidget::Slider),
            "toggle" => Some(NativeWidget::Toggle),
            "radio" => Some(NativeWidget::Radio),
            _ => None,
        }
    }

    pub fn kind(self) -> WidgetKind {
        match self {
            NativeWidget::Slider => WidgetKind::Slider,
            NativeWidget::Toggle => WidgetKind::Toggle,
            NativeWidget::Radio => WidgetKind::Radio,
        }
    }

    /// The runtime function that takes the widget ID as first argument.
    pub fn id_callee(self) -> &'static str {
        match self {
            NativeWidget::Slider => "sliderWithID",
            NativeWidget::Toggle => "toggleWithID",
            NativeWidget::Radio => "radioWithID",
        }
    }
}

/// Per-kind positional counters for one transpile pass.
#[derive(Debug, Default)]
pub struct WidgetCounters {
    counts: HashMap<String, usize>,
}

impl WidgetCounters {
    /// Index for the next widget of `kind`, counting this one.
    pub fn next(&mut self, kind: &str) -> usize {
        let count = self.counts.entry(kind.to_string()).or_default();
        let index = *count;
        *count += 1;
        index
    }
}

/// ID of a native widget, stable while its first argument stays put.
pub fn native_widget_id(widget: NativeWidget, from: usize) -> String {
    format!("{}_{}", widget.kind(), from)
}

/// ID of a chained-method widget, stable while the call keeps its rank.
pub fn method_widget_id(caller_id: Option<&str>, method: &str, index: usize) -> String {
    format!("{}_widget_{}_{}", caller_id.unwrap_or_default(), method, index)
}

/// Describe a `slider(...)`/`toggle(...)`/`radio(...)` call.
///
/// Returns `None` for a call without arguments.
pub fn native_descriptor(
    widget: NativeWidget,
    parts: &CallParts<'_>,
    source: &SourceText<'_>,
    index: usize,
) -> Option<WidgetDescriptor> {
    let first = parts.values.first()?;
    let span = source.span(first.byte_range());
    let number_at = |i: usize| parts.values.get(i).and_then(|node| parse_number(source.node_text(*node)));

    let (min, max, step, options) = match widget {
        NativeWidget::Slider => (
            Some(number_at(1).unwrap_or(0.0)),
            Some(number_at(2).unwrap_or(1.0)),
            number_at(3),
            None,
        ),
        NativeWidget::Toggle => (None, None, None, None),
        NativeWidget::Radio => {
            let options = parts
                .values
                .iter()
                .map(|node| literal_value(*node, source))
                .collect();
            (None, None, None, Some(options))
        }
    };

    Some(WidgetDescriptor {
        from: span.start,
        to: span.end,
        kind: widget.kind(),
        value: Some(source.node_text(*first).to_string()),
        options,
        min,
        max,
        step,
        id: native_widget_id(widget, span.start),
        index: Some(index),
    })
}

/// Parse a JavaScript numeric literal, tolerating `_` separators and a sign.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '_' && !c.is_whitespace()).collect();
    cleaned.parse::<f64>().ok()
}

/// The value a literal argument evaluates to, or its raw text otherwise.
fn literal_value(node: Node<'_>, source: &SourceText<'_>) -> serde_json::Value {
    let text = source.node_text(node);
    match node.kind() {
        "number" | "unary_expression" => match parse_number(text) {
            Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => serde_json::Value::from(n as i64),
            Some(n) => serde_json::Value::from(n),
            None => serde_json::Value::String(text.to_string()),
        },
        "string" => {
            let inner = text.get(1..text.len().saturating_sub(1)).unwrap_or_default();
            serde_json::Value::String(inner.to_string())
        }
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        _ => serde_json::Value::String(text.to_string()),
    }
}
