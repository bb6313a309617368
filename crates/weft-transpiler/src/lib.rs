/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Source-to-source transpiler for live-coded pattern programs.
//!
//! Programs are JavaScript with three kinds of sugar:
//!
//! - pattern literals: double-quoted strings and templates holding
//!   mini-notation become `m("...", offset)` calls, and tagged templates of
//!   registered sub-languages become calls to their handlers
//! - widgets: `slider(...)`, `toggle(...)`, `radio(...)` and registered
//!   chained methods get stable IDs so an editor can draw controls inline
//! - statements: `samples(...)` is awaited, `name: expr` becomes
//!   `expr.p("name")` and the last statement is returned
//!
//! Alongside the rewritten code, [`transpile`] reports the source span of
//! every mini-notation leaf and a descriptor per widget, all in character
//! offsets of the original text.
//!
//! # Example
//!
//! ```
//! use weft_transpiler::{LanguageRegistry, TranspileOptions, Transpiler};
//!
//! let mut registry = LanguageRegistry::new();
//! registry.register_widget_method("_scope");
//! let transpiler = Transpiler::new(registry);
//!
//! let result = transpiler
//!     .transpile("note(\"c e\")._scope()", &TranspileOptions::default())
//!     .unwrap();
//! assert_eq!(
//!     result.output,
//!     "return note(m(\"c e\", 5))._scope('_widget__scope_0')"
//! );
//! ```

pub mod emit;
pub mod error;
pub mod finalize;
pub mod languages;
pub mod options;
pub mod registry;
pub mod result;
pub mod rewrite;
pub mod rules;
pub mod syntax;
pub mod transpiler;
pub mod walker;
pub mod widgets;

pub use error::{TranspileError, TranspileResult};
pub use languages::{
    DEFAULT_LANGUAGE, FnLanguage, MiniNotation, QuotedMiniNotation, SubLanguage, TIDAL_TAG,
};
pub use options::TranspileOptions;
pub use registry::LanguageRegistry;
pub use result::{TransformResult, WidgetDescriptor, WidgetKind};
pub use transpiler::{Transpiler, transpile};
pub use weft_mini::MiniLocation;
