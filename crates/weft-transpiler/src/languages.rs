/*
 * languages.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pluggable sub-languages selected by template tags.

use weft_mini::{MiniLocation, leaf_locations, quoted_regions};
use weft_source_map::SourceOffset;

/// Registry key of the handler used for plain string and template patterns.
pub const DEFAULT_LANGUAGE: &str = "minilang";

/// Template tag of the built-in Tidal notation.
pub const TIDAL_TAG: &str = "tidal";

/// Call emitted for pattern literals when no default handler names another.
pub const PATTERN_CALL: &str = "m";

/// A notation that can appear inside ``tag`...` `` literals.
pub trait SubLanguage: Send + Sync {
    /// Leaf locations of `code`, where `code` starts at character `offset`
    /// of the host source.
    fn locations(&self, code: &str, offset: SourceOffset) -> Vec<MiniLocation>;

    /// Function the literal is rewritten into; defaults to the tag itself.
    fn call_name(&self) -> Option<&str> {
        None
    }
}

/// A sub-language backed by a closure.
pub struct FnLanguage<F> {
    locate: F,
    name: Option<String>,
}

impl<F> FnLanguage<F>
where
    F: Fn(&str, SourceOffset) -> Vec<MiniLocation> + Send + Sync,
{
    pub fn new(locate: F) -> Self {
        Self { locate, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<F> SubLanguage for FnLanguage<F>
where
    F: Fn(&str, SourceOffset) -> Vec<MiniLocation> + Send + Sync,
{
    fn locations(&self, code: &str, offset: SourceOffset) -> Vec<MiniLocation> {
        (self.locate)(code, offset)
    }

    fn call_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Mini-notation as the whole literal.
#[derive(Debug, Clone, Default)]
pub struct MiniNotation {
    pub name: Option<String>,
}

impl MiniNotation {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl SubLanguage for MiniNotation {
    fn locations(&self, code: &str, offset: SourceOffset) -> Vec<MiniLocation> {
        leaf_locations(code, offset)
    }

    fn call_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A host notation embedding mini-notation in double-quoted regions.
#[derive(Debug, Clone, Default)]
pub struct QuotedMiniNotation {
    pub name: Option<String>,
}

impl QuotedMiniNotation {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl SubLanguage for QuotedMiniNotation {
    fn locations(&self, code: &str, offset: SourceOffset) -> Vec<MiniLocation> {
        quoted_regions(code, offset)
    }

    fn call_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
