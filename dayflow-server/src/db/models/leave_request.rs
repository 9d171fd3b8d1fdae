//! Leave Request Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;
use super::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    Paid,
    Sick,
    Unpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Leave request matching the `leave_request` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: i64,
    pub end_date: i64,
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comments: Option<String>,
    pub created_at: i64,
}

/// Leave request joined with the user's email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestView {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: i64,
    pub end_date: i64,
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comments: Option<String>,
    pub created_at: i64,
    pub email: Option<String>,
}

/// Leave application payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplyRequest {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: i64,
    pub end_date: i64,
    #[validate(length(min = 1, message = "Please provide a reason"))]
    pub reason: String,
}

/// Admin decision payload
///
/// Re-deciding an already-decided request is accepted; the new decision
/// overwrites the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecisionRequest {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comments: Option<String>,
}
