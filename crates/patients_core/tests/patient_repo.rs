use patients_core::db::open_db_in_memory;
use patients_core::{Patient, PatientRepository, RepoError, SqlitePatientRepository};
use rusqlite::Connection;

#[test]
fn find_all_on_empty_store_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();

    assert!(repo.find_all().unwrap().is_empty());
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn save_without_id_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();

    let first = repo
        .save(&Patient::new("Pepe Argento", 23, "pepe@gmail.com"))
        .unwrap();
    let second = repo
        .save(&Patient::new("Juan Castro", 44, "juan@gmail.com"))
        .unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(second.name, "Juan Castro");
}

#[test]
fn find_all_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();
    for name in ["c", "a", "b"] {
        repo.save(&Patient::new(name, 1, "x@example.com")).unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|patient| patient.name)
        .collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn save_with_existing_id_overwrites_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();
    let stored = repo
        .save(&Patient::new("Pepe Argento", 23, "pepe@gmail.com"))
        .unwrap();
    let id = stored.id.unwrap();

    repo.save(&Patient::with_id(id, "Pedro Argento", 48, "pedro@gmail.com"))
        .unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Patient::with_id(id, "Pedro Argento", 48, "pedro@gmail.com")
    );
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn save_with_unknown_explicit_id_inserts_that_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&Patient::with_id(42, "Ana", 30, "ana@example.com"))
        .unwrap();

    assert_eq!(saved.id, Some(42));
    assert!(repo.exists_by_id(42).unwrap());
}

#[test]
fn find_by_missing_id_is_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();

    assert!(repo.find_by_id(99).unwrap().is_none());
    assert!(!repo.exists_by_id(99).unwrap());
}

#[test]
fn delete_removes_row_and_missing_delete_is_noop() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();
    let stored = repo.save(&Patient::new("Ana", 30, "ana@example.com")).unwrap();
    let id = stored.id.unwrap();

    repo.delete_by_id(id).unwrap();
    assert!(repo.find_by_id(id).unwrap().is_none());

    repo.delete_by_id(id).unwrap();
}

#[test]
fn deleted_ids_are_not_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();
    let first = repo.save(&Patient::new("Ana", 30, "ana@example.com")).unwrap();
    repo.delete_by_id(first.id.unwrap()).unwrap();

    let second = repo.save(&Patient::new("Bea", 31, "bea@example.com")).unwrap();
    assert_ne!(second.id, first.id);
}

#[test]
fn blank_name_is_rejected_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();

    let err = repo.save(&Patient::new("  ", 30, "x@example.com")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn invalid_persisted_row_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO patients (name, age, email) VALUES ('', 1, 'x@example.com');",
        [],
    )
    .unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();

    let err = repo.find_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn repository_rejects_connection_without_patients_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqlitePatientRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("patients"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE patients (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL
        );",
    )
    .unwrap();

    let result = SqlitePatientRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "patients",
            column: "email"
        })
    ));
}
