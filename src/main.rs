//! Main entry point for the application.
//!
//! This module loads environment variables, initializes logging, reads the session
//! and task fixtures and runs the generation batch, printing its trace to stdout.

use clap::Parser;
use creation_codex::cli::Cli;
use creation_codex::{load_session, load_tasks, run_simulation, utils, Result};
use std::process::ExitCode;
use tracing::{debug, error};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Load environment variables
/// 2. Parse CLI arguments
/// 3. Initialize logging system
/// 4. Load fixtures and run the batch
fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_file);

    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Simulation failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let session = load_session(&cli.session_path())?;
    let tasks = load_tasks(&cli.tasks_path())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_simulation(session, tasks, &mut out)?;
    Ok(())
}
