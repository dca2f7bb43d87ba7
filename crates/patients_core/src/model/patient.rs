//! Patient domain model.
//!
//! # Responsibility
//! - Define the single persisted record and its JSON shape.
//! - Validate write payloads before they reach storage.
//!
//! # Invariants
//! - `id` is `None` only for records that were never stored.
//! - `name` is never blank for a persisted record.
//! - `email` is opaque text; no format rules apply.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned integer identity.
pub type PatientId = i64;

/// Canonical patient record.
///
/// Serialized as `{ "id": integer|null, "name", "age", "email" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Absent on create payloads; assigned by the store.
    #[serde(default)]
    pub id: Option<PatientId>,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Validation failures for patient write payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientValidationError {
    /// `name` is empty or whitespace-only.
    BlankName,
}

impl Display for PatientValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "patient name must not be blank"),
        }
    }
}

impl Error for PatientValidationError {}

impl Patient {
    /// Builds an unsaved patient (no id yet).
    pub fn new(name: impl Into<String>, age: i32, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Builds a patient carrying a known id, as used by update payloads.
    pub fn with_id(
        id: PatientId,
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, age, email)
        }
    }

    /// Checks the write-side invariants of the record.
    ///
    /// # Errors
    /// - [`PatientValidationError::BlankName`] when `name` has no visible characters.
    pub fn validate(&self) -> Result<(), PatientValidationError> {
        if self.name.trim().is_empty() {
            return Err(PatientValidationError::BlankName);
        }
        Ok(())
    }
}
