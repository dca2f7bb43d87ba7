use clap::Parser;
use patients_core::{PatientRepository, RepoError, SqlitePatientRepository};
use patients_server::{open_store, AppState, Config};
use rusqlite::Connection;

#[test]
fn open_store_seeds_file_database_once() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("patients.db");
    let db_arg = db_path.to_str().unwrap();
    let config = Config::try_parse_from(["patients-server", "--db-path", db_arg, "--seed"]).unwrap();

    {
        let conn = open_store(&config).unwrap();
        let repo = SqlitePatientRepository::try_new(&conn).unwrap();
        assert_eq!(repo.count().unwrap(), 3);
    }

    let conn = open_store(&config).unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();
    assert_eq!(repo.count().unwrap(), 3);
}

#[test]
fn open_store_without_seed_is_empty() {
    let config = Config::try_parse_from(["patients-server"]).unwrap();

    let conn = open_store(&config).unwrap();
    let repo = SqlitePatientRepository::try_new(&conn).unwrap();
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn app_state_rejects_connection_without_patients_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = AppState::try_new(conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("patients"))
    ));
}

#[test]
fn app_state_accepts_migrated_store() {
    let config = Config::try_parse_from(["patients-server", "--seed"]).unwrap();

    let conn = open_store(&config).unwrap();
    assert!(AppState::try_new(conn).is_ok());
}
