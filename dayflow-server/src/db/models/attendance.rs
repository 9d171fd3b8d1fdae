//! Attendance Model
//!
//! Per-user, per-day check-in/check-out records. At most one record per
//! (user, calendar day), backed by a unique index.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use super::user::{Role, UserId};

/// Attendance status for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "Half-day")]
    HalfDay,
    Leave,
}

/// Attendance record matching the `attendance` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    /// Calendar day, truncated to server-local midnight (epoch millis)
    pub date: i64,
    pub check_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<i64>,
    pub status: AttendanceStatus,
    /// Hours between check-in and check-out, 2 decimal places
    #[serde(default)]
    pub work_duration: f64,
    pub created_at: i64,
}

/// Attendance record joined with the user's email and role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceView {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    pub date: i64,
    pub check_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<i64>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub work_duration: f64,
    pub created_at: i64,
    // Joined from the user record
    pub email: Option<String>,
    pub role: Option<Role>,
}
