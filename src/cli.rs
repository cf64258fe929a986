use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_SESSION_FILE, DEFAULT_TASKS_FILE};

/// Simulates a mass content generation batch from session and task fixtures
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Directory holding the session and task fixtures
    #[arg(short, long, env = "CODEX_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Session fixture, relative to the data directory unless absolute
    #[arg(short, long, default_value = DEFAULT_SESSION_FILE)]
    pub session: PathBuf,

    /// Task list fixture, relative to the data directory unless absolute
    #[arg(short, long, default_value = DEFAULT_TASKS_FILE)]
    pub tasks: PathBuf,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, env = "CODEX_LOG", default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file under `logs/`
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(&self.session)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join(&self.tasks)
    }
}
