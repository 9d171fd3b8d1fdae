//! Database Module
//!
//! Owns the embedded SurrealDB instance and the table/index definitions.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "dayflow";
const DATABASE: &str = "hrms";

/// Database service over the embedded RocksDB-backed engine
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under `data_dir` and define the schema
    pub async fn new(data_dir: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(data_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %data_dir.display(), "Database connection established");

        define_schema(&db).await?;
        tracing::info!("Database schema defined");

        Ok(Self { db })
    }
}

/// Define tables and unique indexes (idempotent)
///
/// The unique indexes guard the invariants that reads alone cannot: one
/// account per email, one profile per user, one attendance record per
/// (user, day), one payroll slip per (user, period).
pub async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS employee_profile SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS attendance SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS leave_request SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS payroll SCHEMALESS;

        DEFINE INDEX IF NOT EXISTS user_email ON user FIELDS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS profile_user ON employee_profile FIELDS user UNIQUE;
        DEFINE INDEX IF NOT EXISTS profile_employee_id ON employee_profile FIELDS employeeId UNIQUE;
        DEFINE INDEX IF NOT EXISTS attendance_user_date ON attendance FIELDS user, date UNIQUE;
        DEFINE INDEX IF NOT EXISTS payroll_user_period ON payroll FIELDS user, month, year UNIQUE;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
    .check()
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

    Ok(())
}
