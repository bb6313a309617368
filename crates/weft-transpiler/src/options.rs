/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// Per-call switches for [`crate::transpile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TranspileOptions {
    /// Wrap the program in `(async () => { ... })()`
    pub wrap_async: bool,
    /// Turn the last statement into a `return`
    pub add_return: bool,
    /// Collect mini-notation leaf locations
    pub emit_locations: bool,
    /// Collect widget descriptors
    pub emit_widgets: bool,
    /// Namespace for chained-method widget IDs, usually one per editor
    pub caller_id: Option<String>,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            wrap_async: false,
            add_return: true,
            emit_locations: true,
            emit_widgets: true,
            caller_id: None,
        }
    }
}
