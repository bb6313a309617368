//! weft CLI - Main entry point

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod diagnostics;
mod input;

use commands::{OutputFormat, TranspileArgs};

#[derive(Parser)]
#[command(name = "weft")]
#[command(version)]
#[command(about = "Transpile live-coded pattern programs", long_about = None)]
struct Cli {
    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the transpiled program
    Transpile {
        #[command(flatten)]
        args: TranspileArgs,

        /// Print the emitted code, or the whole result as JSON
        #[arg(long, value_enum, default_value_t = OutputFormat::Code)]
        format: OutputFormat,
    },

    /// Print the widget descriptors as JSON
    Widgets {
        #[command(flatten)]
        args: TranspileArgs,
    },

    /// Print every mini-notation leaf with the text it covers
    Locations {
        #[command(flatten)]
        args: TranspileArgs,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Transpile { args, format } => commands::transpile::execute(&args, format),
        Commands::Widgets { args } => commands::widgets::execute(&args),
        Commands::Locations { args } => commands::locations::execute(&args),
    }
}
