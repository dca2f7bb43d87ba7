//! HTTP server for the patient registry.
//!
//! Wires configuration, logging, storage and the axum router together.
//! Business rules live in `patients_core`.

pub mod api;
pub mod config;
pub mod state;

use log::info;
use patients_core::db::{open_db, open_db_in_memory, DbError};
use patients_core::{seed_demo_patients, RepoError, SqlitePatientRepository};
use rusqlite::Connection;
use tokio::net::TcpListener;

pub use api::api_router;
pub use config::Config;
pub use state::AppState;

/// Startup and serve failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("database unavailable: {0}")]
    Db(#[from] DbError),
    #[error("patient store not usable: {0}")]
    Store(#[from] RepoError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Opens the configured store and seeds it when asked.
pub fn open_store(config: &Config) -> Result<Connection, ServerError> {
    let conn = match config.db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };

    if config.seed {
        let repo = SqlitePatientRepository::try_new(&conn)?;
        seed_demo_patients(&repo)?;
    }

    Ok(conn)
}

/// Initializes logging, opens the store, and serves until Ctrl-C.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let level = config.effective_log_level().map_err(ServerError::Logging)?;
    patients_core::init_logging(level, config.log_dir.as_deref()).map_err(ServerError::Logging)?;

    let conn = open_store(&config)?;
    let app = api_router(AppState::try_new(conn)?);

    let listener = TcpListener::bind(config.bind).await?;
    let addr = listener.local_addr()?;
    info!("event=server_start module=server status=ok addr={addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("event=server_shutdown module=server status=start");
}
