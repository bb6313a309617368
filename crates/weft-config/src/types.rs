//! Core type definitions for configuration layers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use weft_transpiler::TranspileOptions;

/// Merge operation for an array value.
///
/// Controls how values from different configuration layers are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeOp {
    /// This layer's items replace all items from earlier layers.
    Prefer,

    /// This layer's items are appended to earlier items (the default).
    #[default]
    Concat,
}

/// One configuration layer as written in a `weft.toml` file.
///
/// Every field is optional so that a layer only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigLayer {
    pub transpile: TranspileSection,
    /// Chained methods that produce widgets
    pub widget_methods: Vec<String>,
    pub widget_methods_merge: MergeOp,
    /// Sub-languages keyed by template tag
    pub languages: IndexMap<String, LanguageConfig>,
}

/// The `[transpile]` table: overrides for [`TranspileOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TranspileSection {
    pub wrap_async: Option<bool>,
    pub add_return: Option<bool>,
    pub emit_locations: Option<bool>,
    pub emit_widgets: Option<bool>,
    pub caller_id: Option<String>,
}

impl TranspileSection {
    /// Overwrite the fields of `options` that this section sets.
    pub fn apply(&self, options: &mut TranspileOptions) {
        if let Some(value) = self.wrap_async {
            options.wrap_async = value;
        }
        if let Some(value) = self.add_return {
            options.add_return = value;
        }
        if let Some(value) = self.emit_locations {
            options.emit_locations = value;
        }
        if let Some(value) = self.emit_widgets {
            options.emit_widgets = value;
        }
        if let Some(value) = &self.caller_id {
            options.caller_id = Some(value.clone());
        }
    }
}

/// A `[languages.<tag>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LanguageConfig {
    /// Function the literal is rewritten into, defaulting to the tag
    pub name: Option<String>,
    pub notation: Notation,
}

/// How leaf locations are found inside a tagged literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// The literal is mini-notation
    #[default]
    Mini,
    /// Mini-notation lives in double-quoted regions of the literal
    QuotedMini,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Invalid config{}: {source}", describe_origin(.origin))]
    Toml {
        origin: Option<PathBuf>,
        source: toml::de::Error,
    },
}

fn describe_origin(origin: &Option<PathBuf>) -> String {
    origin
        .as_ref()
        .map(|path| format!(" file {}", path.display()))
        .unwrap_or_default()
}

impl ConfigLayer {
    /// Parse a layer from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            origin: None,
            source,
        })
    }

    /// Read and parse a layer from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            origin: Some(path.to_path_buf()),
            source,
        })
    }
}
