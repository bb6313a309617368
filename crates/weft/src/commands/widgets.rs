/*
 * widgets.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Widgets command implementation
 */

use std::process::ExitCode;

use anyhow::Result;

use super::{TranspileArgs, run};

/// Execute the widgets command
pub fn execute(args: &TranspileArgs) -> Result<ExitCode> {
    let Some((_, result)) = run(args)? else {
        return Ok(ExitCode::FAILURE);
    };

    let widgets = result.widgets.unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&widgets)?);
    Ok(ExitCode::SUCCESS)
}
