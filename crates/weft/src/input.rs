/*
 * input.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Reading program text from a file or stdin
 */

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// A program to transpile and the name used in diagnostics.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub text: String,
}

impl Input {
    /// Read `path`, or stdin when `path` is absent or `-`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path != Path::new("-") => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Ok(Self {
                    name: path.display().to_string(),
                    text,
                })
            }
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read program from stdin")?;
                Ok(Self {
                    name: "<stdin>".to_string(),
                    text,
                })
            }
        }
    }
}
