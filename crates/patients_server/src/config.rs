//! Process configuration.
//!
//! Every flag can also be supplied through a `PATIENTS_*` environment
//! variable; explicit flags win.

use clap::Parser;
use patients_core::logging::normalize_level;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command line / environment configuration for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "patients-server", version, about = "Patient registry REST API")]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "PATIENTS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// SQLite database file. An in-memory store is used when omitted.
    #[arg(long, env = "PATIENTS_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// One of trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "PATIENTS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files. Logs go to stderr when omitted.
    #[arg(long, env = "PATIENTS_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Load the demo patients (ids 1, 2 and 3) into an empty store at startup.
    /// A store emptied by deletes is reseeded with the same ids.
    #[arg(long, env = "PATIENTS_SEED", default_value_t = false)]
    pub seed: bool,
}

impl Config {
    /// Resolved log level, falling back to the build-mode default.
    ///
    /// # Errors
    /// - Returns an error when the configured level is not recognised.
    pub fn effective_log_level(&self) -> Result<&'static str, String> {
        match self.log_level.as_deref() {
            Some(level) => normalize_level(level),
            None => Ok(patients_core::default_log_level()),
        }
    }
}
