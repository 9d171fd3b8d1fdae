//! Payroll Model
//!
//! Generated salary slips. Each slip is a point-in-time snapshot of the
//! profile's salary structure; later profile changes never touch it.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;
use super::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrollStatus {
    Pending,
    Paid,
}

/// Payroll slip matching the `payroll` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    /// Month label, e.g. "January" or "01"
    pub month: String,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub status: PayrollStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<i64>,
    pub created_at: i64,
}

/// Payroll slip joined with the user's email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollView {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    pub month: String,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub status: PayrollStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<i64>,
    pub created_at: i64,
    pub email: Option<String>,
}

/// Payroll generation payload (Admin)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayrollGenerateRequest {
    /// Target user id ("user:key")
    #[validate(length(min = 1, message = "Please provide a userId"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Please provide a month"))]
    pub month: String,
    pub year: i32,
}
