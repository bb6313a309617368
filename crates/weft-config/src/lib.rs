//! Layered configuration for the weft transpiler.
//!
//! Configuration comes from several layers, merged in order:
//!
//! 1. built-in defaults ([`ConfigLayer::defaults`])
//! 2. a TOML file (`weft.toml`)
//! 3. command-line flags
//!
//! Scalars from later layers win. The `widget-methods` array concatenates
//! across layers unless a layer sets `widget-methods-merge = "prefer"`, in
//! which case it replaces everything before it.
//!
//! # Example
//!
//! ```
//! use weft_config::{ConfigLayer, merge_layers};
//!
//! let file = ConfigLayer::from_toml_str(
//!     r#"
//!     widget-methods = ["_meter"]
//!
//!     [transpile]
//!     wrap-async = true
//!
//!     [languages.tidal2]
//!     notation = "quoted-mini"
//!     "#,
//! )
//! .unwrap();
//!
//! let config = merge_layers(&[ConfigLayer::defaults(), file]);
//! assert!(config.options.wrap_async);
//! assert!(config.widget_methods.contains("_scope"));
//! assert!(config.widget_methods.contains("_meter"));
//!
//! let registry = config.registry();
//! assert!(registry.sub_language("tidal2").is_some());
//! ```

mod merged;
mod types;

pub use merged::{BUILTIN_WIDGET_METHODS, ResolvedConfig, merge_layers};
pub use types::{ConfigError, ConfigLayer, LanguageConfig, MergeOp, Notation, TranspileSection};
