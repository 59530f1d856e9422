//! KB CLI - theme descriptor tooling.
//!
//! Provides commands for:
//! - `check`: Validate the theme configuration
//! - `resolve`: Show the sidebar resolved for a page path

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ResolveArgs};
use output::Output;

/// KB - knowledge base theme descriptor.
#[derive(Parser)]
#[command(name = "kb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the theme configuration.
    Check(CheckArgs),
    /// Resolve the sidebar for a page path.
    Resolve(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set
    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Resolve(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables DEBUG level (resolution tracing), otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
