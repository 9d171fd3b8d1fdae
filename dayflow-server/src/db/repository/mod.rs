//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

pub mod attendance;
pub mod employee_profile;
pub mod leave_request;
pub mod payroll;
pub mod user;

pub use attendance::AttendanceRepository;
pub use employee_profile::EmployeeProfileRepository;
pub use leave_request::LeaveRequestRepository;
pub use payroll::PayrollRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Map a SurrealDB error to `Duplicate` with the given message when it is a
/// unique-index violation, otherwise to `Database`. Unique indexes are the
/// backstop for the read-then-write race on keyed inserts.
pub(crate) fn map_unique_violation(err: surrealdb::Error, duplicate_msg: &str) -> RepoError {
    let text = err.to_string();
    if text.contains("already contains") || text.contains("index") {
        RepoError::Duplicate(duplicate_msg.to_string())
    } else {
        RepoError::Database(text)
    }
}

/// Base repository with database reference
///
/// IDs use the "table:id" string form end to end; parse with
/// `str::parse::<RecordId>()` and create with `RecordId::from_table_key`.
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
