/*
 * result.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! What a transpile call hands back to the editor.

use serde::{Deserialize, Serialize};
use std::fmt;
use weft_mini::MiniLocation;
use weft_source_map::SourceOffset;

/// Output of one transpile call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    /// The rewritten JavaScript
    pub output: String,
    /// Leaf spans of every recognised pattern literal, in traversal order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_locations: Option<Vec<MiniLocation>>,
    /// Interactive controls, in traversal order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<WidgetDescriptor>>,
}

/// The kind of control a widget renders as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetKind {
    Slider,
    Toggle,
    Radio,
    /// A chained method contributed by a UI module, e.g. `_scope`
    Method(String),
}

impl WidgetKind {
    pub fn as_str(&self) -> &str {
        match self {
            WidgetKind::Slider => "slider",
            WidgetKind::Toggle => "toggle",
            WidgetKind::Radio => "radio",
            WidgetKind::Method(name) => name,
        }
    }
}

impl From<String> for WidgetKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "slider" => WidgetKind::Slider,
            "toggle" => WidgetKind::Toggle,
            "radio" => WidgetKind::Radio,
            _ => WidgetKind::Method(value),
        }
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One interactive control bound to a position in the original source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub from: SourceOffset,
    pub to: SourceOffset,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Raw literal text of the bound value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub id: String,
    /// Position among widgets of the same kind in this program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}
