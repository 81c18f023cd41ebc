// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Holotable CLI - Star Wars archive exploration from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Random record from a category
//! holotable table planets
//!
//! # A specific record
//! holotable table people --id 1
//!
//! # Random character with portrait check
//! holotable character
//!
//! # HTML output (the widget surface)
//! holotable table films --format html
//!
//! # List categories
//! holotable categories
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{categories, character, table};

// ============================================================================
// CLI Definition
// ============================================================================

/// Holotable CLI - Star Wars archive explorer.
#[derive(Parser)]
#[command(name = "holotable")]
#[command(about = "Star Wars archive explorer CLI")]
#[command(long_about = r#"
Holotable fetches records from the Star Wars archive APIs and renders
them as two-column tables with resolved cross-reference links.

Categories:
  • people
  • species
  • planets
  • films
  • starships
  • vehicles

Examples:
  holotable table planets          # Random planet
  holotable table people --id 1    # Luke Skywalker
  holotable character              # Random character + portrait
  holotable table films --format html
"#)]
#[command(version)]
#[command(author = "Holotable Contributors")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or html).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render a record from a category as a table.
    #[command(visible_alias = "t")]
    Table(table::TableArgs),

    /// Show a character with a verified portrait.
    #[command(visible_alias = "c")]
    Character(character::CharacterArgs),

    /// List the archive categories.
    Categories,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// HTML fragment output.
    Html,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error (fetch, decode, or resolution failure).
    Error = 1,
    /// Unknown category.
    UnknownCategory = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("holotable=debug,info")
    } else {
        EnvFilter::new("holotable=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Table(args) => table::run(args, &cli).await,
        Commands::Character(args) => character::run(args, &cli).await,
        Commands::Categories => categories::run(&cli),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        let code = if e.downcast_ref::<holotable_core::CoreError>().is_some() {
            ExitCode::UnknownCategory
        } else {
            ExitCode::Error
        };
        std::process::exit(code as i32);
    }

    Ok(())
}
