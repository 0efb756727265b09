//! Redline CLI
//!
//! Command-line interface for comparing legal documents with track changes

use clap::{Parser, Subcommand};
use redline_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "redline")]
#[command(about = "Redline - Legal document comparison", long_about = None)]
struct Cli {
    /// Enable logging to stderr with the given profile (dev or prod)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare an original document with a marked-up revision
    Compare(commands::compare::CompareArgs),
    /// Resolve the track changes of a single document
    Sanitize(commands::sanitize::SanitizeArgs),
    /// Print a Markdown summary of the changes between two documents
    Summary(commands::summary::SummaryArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(profile) = cli.log.as_deref() {
        logging_facility::init(profile.parse::<Profile>()?);
    }

    match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Sanitize(args) => commands::sanitize::execute(args),
        Commands::Summary(args) => commands::summary::execute(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
