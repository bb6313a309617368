//! Command implementations for the weft CLI
//!
//! Every command reads one program, resolves configuration from the
//! built-in defaults, an optional TOML file and the command-line flags,
//! then runs the transpiler.

pub mod locations;
pub mod transpile;
pub mod widgets;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use tracing::debug;
use weft_config::{ConfigLayer, ResolvedConfig, TranspileSection, merge_layers};
use weft_transpiler::{TransformResult, Transpiler};

use crate::diagnostics::render_error;
use crate::input::Input;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct TranspileArgs {
    /// Program file ('-' or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Wrap the program in an async IIFE
    #[arg(long)]
    pub wrap_async: bool,

    /// Do not turn the last statement into a return
    #[arg(long)]
    pub no_return: bool,

    /// Do not collect mini-notation locations
    #[arg(long)]
    pub no_locations: bool,

    /// Do not collect widget descriptors
    #[arg(long)]
    pub no_widgets: bool,

    /// Namespace for widget IDs
    #[arg(long)]
    pub id: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The emitted JavaScript
    Code,
    /// The full transform result
    Json,
}

impl TranspileArgs {
    /// The layer contributed by command-line flags
    fn flag_layer(&self) -> ConfigLayer {
        ConfigLayer {
            transpile: TranspileSection {
                wrap_async: self.wrap_async.then_some(true),
                add_return: self.no_return.then_some(false),
                emit_locations: self.no_locations.then_some(false),
                emit_widgets: self.no_widgets.then_some(false),
                caller_id: self.id.clone(),
            },
            ..Default::default()
        }
    }

    pub fn resolve_config(&self) -> Result<ResolvedConfig> {
        let mut layers = vec![ConfigLayer::defaults()];
        if let Some(path) = &self.config {
            debug!(path = %path.display(), "Loading config file");
            layers.push(ConfigLayer::from_file(path)?);
        }
        layers.push(self.flag_layer());
        Ok(merge_layers(&layers))
    }
}

/// Read the input and transpile it.
///
/// Returns `None` after printing a diagnostic when the program does not
/// transpile. I/O and config errors propagate.
pub fn run(args: &TranspileArgs) -> Result<Option<(Input, TransformResult)>> {
    let config = args.resolve_config()?;
    let input = Input::read(args.input.as_deref())?;
    let transpiler = Transpiler::new(config.registry());

    match transpiler.transpile(&input.text, &config.options) {
        Ok(result) => Ok(Some((input, result))),
        Err(err) => {
            eprint!("{}", render_error(&input.name, &input.text, &err, false));
            Ok(None)
        }
    }
}
