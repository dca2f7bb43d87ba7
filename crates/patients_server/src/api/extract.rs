//! Request body extraction for patient payloads.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use patients_core::Patient;

use crate::api::error::ApiError;

/// JSON patient body where an empty body and a literal `null` both mean
/// "no payload".
///
/// Malformed JSON or missing required fields are rejected as invalid
/// requests; bodies over the default limit answer 413. The content type is
/// not enforced.
#[derive(Debug)]
pub struct PatientBody(pub Option<Patient>);

#[async_trait]
impl<S> FromRequest<S> for PatientBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(rejection.body_text()),
                _ => ApiError::InvalidRequest(rejection.body_text()),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        serde_json::from_slice::<Option<Patient>>(&bytes)
            .map(Self)
            .map_err(|err| ApiError::InvalidRequest(format!("malformed patient payload: {err}")))
    }
}
