//! HTTP boundary for the patient registry.
//!
//! Validates request shape and maps service outcomes onto status codes.
//! Patient routes live under `/api/pacientes`.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;

pub use router::api_router;
