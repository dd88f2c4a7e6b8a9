//! Dbslim CLI - reclaim space and refresh planner statistics for SQLite files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod commands;
mod output;

use commands::optimize;

/// Reclaim free space and refresh query-planner statistics for a SQLite database
#[derive(Parser)]
#[command(name = "dbslim", version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    db_path: PathBuf,

    /// Suppress informational output
    #[arg(long, short)]
    quiet: bool,

    /// Output the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Surface a missing path before any database interaction
    if !cli.db_path.exists() {
        if !cli.quiet {
            output::error(&format!(
                "Database file not found: {}",
                cli.db_path.display()
            ));
        }
        return ExitCode::FAILURE;
    }

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    optimize::run(cli.db_path, cli.quiet, cli.json)
}
