//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the service layer.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - Write paths enforce `Patient::validate()` before persistence.
//! - Repositories carry no existence rules; those belong to the service.

pub mod patient_repo;
