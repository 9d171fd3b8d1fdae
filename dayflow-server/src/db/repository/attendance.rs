//! Attendance Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult, map_unique_violation};
use crate::db::models::{Attendance, AttendanceStatus, AttendanceView, UserId};

const ALREADY_CHECKED_IN: &str = "Already checked in for today";

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the record for a (user, day) pair
    pub async fn find_by_user_and_date(
        &self,
        user: &UserId,
        date: i64,
    ) -> RepoResult<Option<Attendance>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE user = $user AND date = $date LIMIT 1")
            .bind(("user", user.clone()))
            .bind(("date", date))
            .await?;
        let records: Vec<Attendance> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Create the day's check-in record
    ///
    /// A unique index on (user, date) backstops two simultaneous check-ins;
    /// the losing insert surfaces as `Duplicate`.
    pub async fn check_in(&self, user: &UserId, date: i64, now: i64) -> RepoResult<Attendance> {
        if self.find_by_user_and_date(user, date).await?.is_some() {
            return Err(RepoError::Duplicate(ALREADY_CHECKED_IN.to_string()));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE attendance SET
                    user = $user,
                    date = $date,
                    checkIn = $now,
                    status = $status,
                    workDuration = 0.0,
                    createdAt = $now
                RETURN AFTER"#,
            )
            .bind(("user", user.clone()))
            .bind(("date", date))
            .bind(("now", now))
            .bind(("status", AttendanceStatus::Present))
            .await
            .map_err(|e| map_unique_violation(e, ALREADY_CHECKED_IN))?;

        result
            .take::<Option<Attendance>>(0)
            .map_err(|e| map_unique_violation(e, ALREADY_CHECKED_IN))?
            .ok_or_else(|| RepoError::Database("Failed to create attendance record".to_string()))
    }

    /// Record the check-out time and the computed work duration
    pub async fn set_check_out(
        &self,
        id: &RecordId,
        check_out: i64,
        work_duration: f64,
    ) -> RepoResult<Attendance> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $record SET checkOut = $check_out, workDuration = $duration RETURN AFTER",
            )
            .bind(("record", id.clone()))
            .bind(("check_out", check_out))
            .bind(("duration", work_duration))
            .await?;
        result
            .take::<Option<Attendance>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Attendance {} not found", id)))
    }

    /// A user's history, newest day first
    pub async fn find_by_user(&self, user: &UserId) -> RepoResult<Vec<Attendance>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE user = $user ORDER BY date DESC")
            .bind(("user", user.clone()))
            .await?;
        let records: Vec<Attendance> = result.take(0)?;
        Ok(records)
    }

    /// All records joined with user email/role, newest day first
    pub async fn find_all_views(&self) -> RepoResult<Vec<AttendanceView>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT *, user.email AS email, user.role AS role FROM attendance ORDER BY date DESC",
            )
            .await?;
        let records: Vec<AttendanceView> = result.take(0)?;
        Ok(records)
    }
}
