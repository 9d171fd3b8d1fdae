//! Leave Request Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    LeaveApplyRequest, LeaveDecisionRequest, LeaveRequest, LeaveRequestView, LeaveStatus, UserId,
};
use crate::utils::time::now_millis;

#[derive(Clone)]
pub struct LeaveRequestRepository {
    base: BaseRepository,
}

impl LeaveRequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a Pending leave request
    pub async fn create(&self, user: &UserId, data: LeaveApplyRequest) -> RepoResult<LeaveRequest> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE leave_request SET
                    user = $user,
                    `type` = $leave_type,
                    startDate = $start_date,
                    endDate = $end_date,
                    reason = $reason,
                    status = $status,
                    createdAt = $now
                RETURN AFTER"#,
            )
            .bind(("user", user.clone()))
            .bind(("leave_type", data.leave_type))
            .bind(("start_date", data.start_date))
            .bind(("end_date", data.end_date))
            .bind(("reason", data.reason))
            .bind(("status", LeaveStatus::Pending))
            .bind(("now", now_millis()))
            .await?;

        result
            .take::<Option<LeaveRequest>>(0)?
            .ok_or_else(|| RepoError::Database("Failed to create leave request".to_string()))
    }

    /// A user's requests, newest created first
    pub async fn find_by_user(&self, user: &UserId) -> RepoResult<Vec<LeaveRequest>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM leave_request WHERE user = $user ORDER BY createdAt DESC")
            .bind(("user", user.clone()))
            .await?;
        let requests: Vec<LeaveRequest> = result.take(0)?;
        Ok(requests)
    }

    /// All requests joined with user email, newest created first
    pub async fn find_all_views(&self) -> RepoResult<Vec<LeaveRequestView>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT *, user.email AS email FROM leave_request ORDER BY createdAt DESC",
            )
            .await?;
        let requests: Vec<LeaveRequestView> = result.take(0)?;
        Ok(requests)
    }

    /// Record an Admin decision
    ///
    /// Overwrites any prior decision; comments are left unchanged when not
    /// supplied.
    pub async fn decide(&self, id: &str, data: LeaveDecisionRequest) -> RepoResult<LeaveRequest> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let patch = serde_json::to_value(&data)
            .map_err(|e| RepoError::Validation(format!("Invalid decision: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $leave MERGE $patch RETURN AFTER")
            .bind(("leave", thing))
            .bind(("patch", patch))
            .await?;

        result
            .take::<Option<LeaveRequest>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Leave request {} not found", id)))
    }
}
