/*
 * transpiler.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::error::TranspileResult;
use crate::finalize::finalize;
use crate::options::TranspileOptions;
use crate::registry::LanguageRegistry;
use crate::result::TransformResult;
use crate::syntax::{SourceText, parse};
use crate::walker::walk;
use std::sync::Arc;

/// A long-lived transpiler owning a populated registry.
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    registry: Arc<LanguageRegistry>,
}

impl Transpiler {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self::shared(Arc::new(registry))
    }

    pub fn shared(registry: Arc<LanguageRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn transpile(
        &self,
        source: &str,
        options: &TranspileOptions,
    ) -> TranspileResult<TransformResult> {
        transpile(source, options, &self.registry)
    }
}

/// Transpile one program.
///
/// Parses `source`, rewrites pattern literals, widgets, sample loading and
/// labels in a single pass, then injects the final `return`. Fails without
/// partial output on a syntax error or a program whose last statement is
/// not an expression.
///
/// # Example
///
/// ```
/// use weft_transpiler::{LanguageRegistry, TranspileOptions, transpile};
///
/// let result = transpile("s(\"bd hh\")", &TranspileOptions::default(), &LanguageRegistry::new())
///     .unwrap();
/// assert_eq!(result.output, "return s(m(\"bd hh\", 2))");
/// assert_eq!(result.mini_locations.unwrap().len(), 2);
/// ```
pub fn transpile(
    source: &str,
    options: &TranspileOptions,
    registry: &LanguageRegistry,
) -> TranspileResult<TransformResult> {
    let text = SourceText::new(source);
    let tree = parse(&text)?;
    let pass = walk(&tree, &text, registry, options);
    tracing::debug!(
        rewrites = pass.splice.len(),
        locations = pass.locations.len(),
        widgets = pass.widgets.len(),
        "Rewrote program"
    );

    let output = finalize(&tree, &text, &pass.splice, options)?;
    Ok(TransformResult {
        output,
        mini_locations: options.emit_locations.then_some(pass.locations),
        widgets: options.emit_widgets.then_some(pass.widgets),
    })
}
