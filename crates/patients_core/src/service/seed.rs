//! Demo data loader.
//!
//! Seeds the three reference patients into an empty store so a fresh
//! server has something to list. A store that already holds rows is left
//! untouched.

use crate::model::patient::Patient;
use crate::repo::patient_repo::{PatientRepository, RepoResult};
use log::info;

/// Returns the demo patients with their fixed ids 1, 2 and 3.
pub fn demo_patients() -> Vec<Patient> {
    vec![
        Patient::with_id(1, "Pepe Argento", 23, "pepe@gmail.com"),
        Patient::with_id(2, "Juan Castro", 44, "juan@gmail.com"),
        Patient::with_id(3, "Felipe Melo", 18, "felipe@gmail.com"),
    ]
}

/// Inserts the demo patients when the store is empty.
///
/// Ids are written explicitly, so a store emptied by earlier deletes still
/// ends up with ids 1..=3 rather than continuing its autoincrement sequence.
/// Returns the number of inserted rows (0 when the store was populated).
pub fn seed_demo_patients<R: PatientRepository>(repo: &R) -> RepoResult<usize> {
    if repo.count()? > 0 {
        info!("event=seed module=service status=skipped reason=store_not_empty");
        return Ok(0);
    }

    let patients = demo_patients();
    for patient in &patients {
        repo.save(patient)?;
    }

    info!(
        "event=seed module=service status=ok inserted={}",
        patients.len()
    );
    Ok(patients.len())
}
