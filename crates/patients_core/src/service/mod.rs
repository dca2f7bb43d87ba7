//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep HTTP layers decoupled from storage details.

pub mod patient_service;
pub mod seed;
