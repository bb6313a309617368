/*
 * transpile.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transpile command implementation
 */

use std::process::ExitCode;

use anyhow::Result;

use super::{OutputFormat, TranspileArgs, run};

/// Execute the transpile command
pub fn execute(args: &TranspileArgs, format: OutputFormat) -> Result<ExitCode> {
    let Some((_, result)) = run(args)? else {
        return Ok(ExitCode::FAILURE);
    };

    match format {
        OutputFormat::Code => println!("{}", result.output),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(ExitCode::SUCCESS)
}
