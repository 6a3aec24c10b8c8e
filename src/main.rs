//! Validate the backlink network and metadata headers of a markdown corpus.

mod commands;
mod config;
mod diagnostics;
mod error;
mod extract;
mod frontmatter;
mod graph;
mod hub;
mod report;
mod resolver;
mod scanner;
mod schema;
mod types;
mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Command-line interface definition.
#[derive(Parser)]
#[command(
    name = "linkvet",
    about = "Backlink network and header-protocol validation for markdown"
)]
struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Validate links, backlinks, and headers; exit non-zero on any finding
    Check {
        /// Print the structured result as JSON instead of human-readable findings
        #[arg(long)]
        json: bool,
        /// Corpus root directory (defaults to the current directory)
        root: Option<PathBuf>,
    },
    /// Validate and additionally write a markdown report file
    Report {
        /// Where to write the report (defaults to link_validation_report.md under the root)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Corpus root directory (defaults to the current directory)
        root: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Check { json, root } => commands::check(&root_or_cwd(root), json),
        Commands::Report { output, root } => {
            let root = root_or_cwd(root);
            commands::report(&root, output.as_deref())
        },
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    }
}

/// Default the corpus root to the current directory when not given.
fn root_or_cwd(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| PathBuf::from("."))
}
