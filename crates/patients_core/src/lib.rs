//! Core domain logic for the patient registry.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogSink};
pub use model::patient::{Patient, PatientId, PatientValidationError};
pub use repo::patient_repo::{PatientRepository, RepoError, RepoResult, SqlitePatientRepository};
pub use service::patient_service::{PatientService, PatientServiceError, NULL_PATIENT_MESSAGE};
pub use service::seed::{demo_patients, seed_demo_patients};

/// Returns the core crate version, reported by the health endpoint.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
