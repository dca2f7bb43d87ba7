//! Patient endpoints.
//!
//! - `GET /api/pacientes` — list
//! - `GET /api/pacientes/:id` — one patient, or `null`
//! - `POST /api/pacientes` — create
//! - `PUT /api/pacientes` — full update, id taken from the body
//! - `DELETE /api/pacientes/:id` — delete

use axum::extract::{Path, State};
use axum::Json;
use patients_core::{Patient, PatientId, PatientServiceError, NULL_PATIENT_MESSAGE};

use crate::api::error::ApiError;
use crate::api::extract::PatientBody;
use crate::state::AppState;

/// `GET /api/pacientes`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = state
        .with_service(|service| service.get_all().map_err(PatientServiceError::from))
        .await?;
    Ok(Json(patients))
}

/// `GET /api/pacientes/:id` — a missing id answers `200 null`.
pub async fn detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Option<Patient>>, ApiError> {
    let id = parse_patient_id(&raw_id)?;
    let patient = state
        .with_service(move |service| service.get_by_id(id).map_err(PatientServiceError::from))
        .await?;
    Ok(Json(patient))
}

/// `POST /api/pacientes`
pub async fn create(
    State(state): State<AppState>,
    PatientBody(body): PatientBody,
) -> Result<Json<Patient>, ApiError> {
    let patient = require_payload(body)?;
    let created = state
        .with_service(move |service| service.create(patient))
        .await?;
    Ok(Json(created))
}

/// `PUT /api/pacientes`
///
/// A body without `id` is rejected exactly like a missing body.
pub async fn update(
    State(state): State<AppState>,
    PatientBody(body): PatientBody,
) -> Result<Json<Patient>, ApiError> {
    let candidate = require_payload(body)?;
    if candidate.id.is_none() {
        return Err(null_payload());
    }
    let updated = state
        .with_service(move |service| service.update(candidate))
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/pacientes/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<(), ApiError> {
    let id = parse_patient_id(&raw_id)?;
    state
        .with_service(move |service| service.delete(id))
        .await
}

fn parse_patient_id(raw: &str) -> Result<PatientId, ApiError> {
    raw.parse::<PatientId>()
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid patient ID `{raw}`: {e}")))
}

fn require_payload(body: Option<Patient>) -> Result<Patient, ApiError> {
    body.ok_or_else(null_payload)
}

fn null_payload() -> ApiError {
    ApiError::InvalidRequest(NULL_PATIENT_MESSAGE.to_string())
}
