//! Merging configuration layers.

use crate::types::{ConfigLayer, LanguageConfig, MergeOp, Notation};
use indexmap::{IndexMap, IndexSet};
use weft_transpiler::{LanguageRegistry, MiniNotation, QuotedMiniNotation, TranspileOptions};

/// Widget methods contributed by the standard visualisation modules.
pub const BUILTIN_WIDGET_METHODS: &[&str] = &[
    "_pianoroll",
    "_punchcard",
    "_spiral",
    "_scope",
    "_pitchwheel",
    "_spectrum",
];

impl ConfigLayer {
    /// The built-in bottom layer.
    pub fn defaults() -> Self {
        Self {
            widget_methods: BUILTIN_WIDGET_METHODS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ..Default::default()
        }
    }
}

/// The outcome of merging every layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    pub options: TranspileOptions,
    pub widget_methods: IndexSet<String>,
    pub languages: IndexMap<String, LanguageConfig>,
}

/// Merge `layers` from lowest to highest precedence.
pub fn merge_layers(layers: &[ConfigLayer]) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    for layer in layers {
        layer.transpile.apply(&mut resolved.options);

        if layer.widget_methods_merge == MergeOp::Prefer {
            resolved.widget_methods.clear();
        }
        resolved
            .widget_methods
            .extend(layer.widget_methods.iter().cloned());

        for (tag, language) in &layer.languages {
            resolved.languages.insert(tag.clone(), language.clone());
        }
    }
    resolved
}

impl ResolvedConfig {
    /// Build a registry holding the configured languages and widget methods.
    pub fn registry(&self) -> LanguageRegistry {
        let mut registry = LanguageRegistry::new();
        for (tag, language) in &self.languages {
            let name = language.name.clone();
            match language.notation {
                Notation::Mini => registry.register_sub_language(tag, MiniNotation { name }),
                Notation::QuotedMini => {
                    registry.register_sub_language(tag, QuotedMiniNotation { name })
                }
            }
        }
        for method in &self.widget_methods {
            registry.register_widget_method(method);
        }
        registry
    }
}
