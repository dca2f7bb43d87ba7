//! Domain model for the patient registry.
//!
//! # Invariants
//! - Every persisted patient carries a store-assigned `PatientId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod patient;
