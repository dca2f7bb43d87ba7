//! Patient use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete entry points for boundary layers.
//! - Turn update/delete of an unknown id into an explicit `NotFound` failure.
//!
//! # Invariants
//! - `update` is a full overwrite of name, age and email.
//! - `update`/`delete` check existence before mutating. The check and the
//!   write are separate statements and are not atomic.

use crate::model::patient::{Patient, PatientId};
use crate::repo::patient_repo::{PatientRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message used whenever a write payload (or its id on update) is missing.
pub const NULL_PATIENT_MESSAGE: &str = "patient data must not be null";

/// Service error for patient use-cases.
#[derive(Debug)]
pub enum PatientServiceError {
    /// Malformed or incomplete input.
    InvalidRequest(String),
    /// Referenced patient does not exist.
    NotFound(PatientId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PatientServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(message) => write!(f, "{message}"),
            Self::NotFound(id) => write!(f, "Patient with ID: {id} does not exist!"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PatientServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PatientServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidRequest(err.to_string()),
            other => Self::Repo(other),
        }
    }
}

/// Patient service facade over repository implementations.
pub struct PatientService<R: PatientRepository> {
    repo: R,
}

impl<R: PatientRepository> PatientService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored patient in insertion order.
    pub fn get_all(&self) -> RepoResult<Vec<Patient>> {
        self.repo.find_all()
    }

    /// Gets one patient; absence is not an error on the read path.
    pub fn get_by_id(&self, id: PatientId) -> RepoResult<Option<Patient>> {
        self.repo.find_by_id(id)
    }

    /// Stores a new patient and returns it with its assigned id.
    ///
    /// Any id carried by the input is discarded.
    pub fn create(&self, patient: Patient) -> Result<Patient, PatientServiceError> {
        let draft = Patient { id: None, ..patient };
        let created = self.repo.save(&draft)?;
        info!(
            "event=patient_create module=service status=ok id={}",
            created.id.unwrap_or_default()
        );
        Ok(created)
    }

    /// Overwrites an existing patient.
    ///
    /// # Errors
    /// - `InvalidRequest` when `candidate.id` is `None` or the record is invalid.
    /// - `NotFound` when no patient has `candidate.id`.
    pub fn update(&self, candidate: Patient) -> Result<Patient, PatientServiceError> {
        let id = candidate
            .id
            .ok_or_else(|| PatientServiceError::InvalidRequest(NULL_PATIENT_MESSAGE.to_string()))?;

        if !self.repo.exists_by_id(id)? {
            warn!("event=patient_update module=service status=not_found id={id}");
            return Err(PatientServiceError::NotFound(id));
        }

        let updated = self.repo.save(&candidate)?;
        info!("event=patient_update module=service status=ok id={id}");
        Ok(updated)
    }

    /// Deletes an existing patient.
    ///
    /// # Errors
    /// - `NotFound` when no patient has `id`.
    pub fn delete(&self, id: PatientId) -> Result<(), PatientServiceError> {
        if !self.repo.exists_by_id(id)? {
            warn!("event=patient_delete module=service status=not_found id={id}");
            return Err(PatientServiceError::NotFound(id));
        }

        self.repo.delete_by_id(id)?;
        info!("event=patient_delete module=service status=ok id={id}");
        Ok(())
    }
}
