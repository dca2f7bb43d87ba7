//! Patient repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find/save/delete primitives over the `patients` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` assigns an id when absent and overwrites the row otherwise.
//! - `delete_by_id` on a missing id is a silent no-op.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::patient::{Patient, PatientId, PatientValidationError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PATIENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    age,
    email
FROM patients";

const PATIENT_COLUMNS: [&str; 4] = ["id", "name", "age", "email"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for patient persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(PatientValidationError),
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted patient data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PatientValidationError> for RepoError {
    fn from(value: PatientValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for patient records.
pub trait PatientRepository {
    /// Returns every stored patient in insertion (id) order.
    fn find_all(&self) -> RepoResult<Vec<Patient>>;
    fn find_by_id(&self, id: PatientId) -> RepoResult<Option<Patient>>;
    /// Inserts when `patient.id` is `None`, otherwise overwrites that row.
    fn save(&self, patient: &Patient) -> RepoResult<Patient>;
    fn delete_by_id(&self, id: PatientId) -> RepoResult<()>;
    fn exists_by_id(&self, id: PatientId) -> RepoResult<bool>;
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed patient repository.
pub struct SqlitePatientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePatientRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema is
    ///   not in place (connection opened without `open_db*`).
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_patient_table_ready(conn)?;
        Ok(Self { conn })
    }

    /// Constructs a repository without re-checking the schema.
    ///
    /// For connections that already passed `try_new` once.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PatientRepository for SqlitePatientRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PATIENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut patients = Vec::new();
        while let Some(row) = rows.next()? {
            patients.push(parse_patient_row(row)?);
        }
        Ok(patients)
    }

    fn find_by_id(&self, id: PatientId) -> RepoResult<Option<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PATIENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_patient_row(row)?));
        }
        Ok(None)
    }

    fn save(&self, patient: &Patient) -> RepoResult<Patient> {
        patient.validate()?;

        let id = match patient.id {
            None => {
                self.conn.execute(
                    "INSERT INTO patients (name, age, email) VALUES (?1, ?2, ?3);",
                    params![patient.name.as_str(), patient.age, patient.email.as_str()],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO patients (id, name, age, email) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        age = excluded.age,
                        email = excluded.email;",
                    params![
                        id,
                        patient.name.as_str(),
                        patient.age,
                        patient.email.as_str()
                    ],
                )?;
                id
            }
        };

        Ok(Patient {
            id: Some(id),
            ..patient.clone()
        })
    }

    fn delete_by_id(&self, id: PatientId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM patients WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn exists_by_id(&self, id: PatientId) -> RepoResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM patients WHERE id = ?1;", [id], |row| {
                row.get::<_, i64>(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    fn count(&self) -> RepoResult<u64> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM patients;", [], |row| row.get(0))?;
        u64::try_from(total)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{total}`")))
    }
}

fn parse_patient_row(row: &Row<'_>) -> RepoResult<Patient> {
    let patient = Patient {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        age: row.get("age")?,
        email: row.get("email")?,
    };
    patient.validate().map_err(|err| {
        RepoError::InvalidData(format!(
            "row id={} violates model: {err}",
            patient.id.unwrap_or_default()
        ))
    })?;
    Ok(patient)
}

fn ensure_patient_table_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "patients")? {
        return Err(RepoError::MissingRequiredTable("patients"));
    }

    for column in PATIENT_COLUMNS {
        if !table_has_column(conn, "patients", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "patients",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
