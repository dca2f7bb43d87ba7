//! Shared handler state.
//!
//! One SQLite connection is shared by all requests. Each service call locks it
//! and runs on tokio's blocking pool. The schema is verified once, when the
//! state is built.

use std::sync::{Arc, Mutex};

use patients_core::{PatientService, PatientServiceError, RepoResult, SqlitePatientRepository};
use rusqlite::Connection;

use crate::api::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `patients`
    ///   schema is not in place.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        SqlitePatientRepository::try_new(&conn)?;
        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs one service call against the shared connection.
    pub async fn with_service<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: for<'c> FnOnce(
                &PatientService<SqlitePatientRepository<'c>>,
            ) -> Result<T, PatientServiceError>
            + Send
            + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || -> Result<T, ApiError> {
            let conn = db
                .lock()
                .map_err(|_| ApiError::Internal("database lock poisoned".into()))?;
            let service = PatientService::new(SqlitePatientRepository::new(&conn));
            call(&service).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("blocking task failed: {err}")))?
    }
}
