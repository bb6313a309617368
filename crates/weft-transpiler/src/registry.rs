/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Sub-languages and widget methods known to the transpiler.

use crate::languages::{DEFAULT_LANGUAGE, SubLanguage};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::Arc;

/// Append-only tables consulted during transpilation.
///
/// A registry is populated at startup and shared read-only afterwards,
/// typically behind an `Arc` inside a [`crate::Transpiler`].
#[derive(Clone, Default)]
pub struct LanguageRegistry {
    languages: IndexMap<String, Arc<dyn SubLanguage>>,
    widget_methods: IndexSet<String>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `language` under `tag`. A later registration of the same
    /// tag replaces the earlier one.
    pub fn register_sub_language(
        &mut self,
        tag: impl Into<String>,
        language: impl SubLanguage + 'static,
    ) {
        let tag = tag.into();
        if self.languages.contains_key(&tag) {
            tracing::debug!(tag = %tag, "Replacing registered sub-language");
        }
        self.languages.insert(tag, Arc::new(language));
    }

    /// Register a chained method whose calls produce widgets.
    /// Returns `false` if the name was already known.
    pub fn register_widget_method(&mut self, name: impl Into<String>) -> bool {
        self.widget_methods.insert(name.into())
    }

    pub fn sub_language(&self, tag: &str) -> Option<&dyn SubLanguage> {
        self.languages.get(tag).map(|language| language.as_ref())
    }

    /// Handler for untagged pattern literals, if one was registered.
    pub fn default_language(&self) -> Option<&dyn SubLanguage> {
        self.sub_language(DEFAULT_LANGUAGE)
    }

    pub fn is_widget_method(&self, name: &str) -> bool {
        self.widget_methods.contains(name)
    }

    pub fn widget_methods(&self) -> impl Iterator<Item = &str> {
        self.widget_methods.iter().map(String::as_str)
    }
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("languages", &self.languages.keys().collect::<Vec<_>>())
            .field("widget_methods", &self.widget_methods)
            .finish()
    }
}
