//! Employee Profile Model
//!
//! HR metadata tied 1:1 to a user record.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;
use super::user::{AccountStatus, Role, UserId};

pub const DEFAULT_PROFILE_PICTURE: &str = "https://via.placeholder.com/150";

fn default_profile_picture() -> String {
    DEFAULT_PROFILE_PICTURE.to_string()
}

/// Contact details, mutable by the profile owner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Salary structure used as the template for payroll generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryStructure {
    #[serde(default)]
    pub basic: f64,
    #[serde(default)]
    pub hra: f64,
    #[serde(default)]
    pub allowances: f64,
    #[serde(default)]
    pub deductions: f64,
}

impl SalaryStructure {
    /// Allowances plus HRA
    pub fn total_allowances(&self) -> f64 {
        self.allowances + self.hra
    }

    pub fn total_deductions(&self) -> f64 {
        self.deductions
    }

    /// net = basic + (allowances + hra) - deductions
    pub fn net_salary(&self) -> f64 {
        self.basic + self.total_allowances() - self.total_deductions()
    }
}

/// Employee profile matching the `employee_profile` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub department: String,
    pub date_of_joining: i64,
    #[serde(default = "default_profile_picture")]
    pub profile_picture: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub salary_structure: SalaryStructure,
    pub created_at: i64,
}

/// Profile joined with its user's identity fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfileView {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub user: UserId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub department: String,
    pub date_of_joining: i64,
    #[serde(default = "default_profile_picture")]
    pub profile_picture: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub salary_structure: SalaryStructure,
    pub created_at: i64,
    // Joined from the user record
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
}

/// Fields for creating a user + profile pair (registration or Admin create)
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub status: AccountStatus,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub department: String,
    pub salary_structure: SalaryStructure,
}

/// Admin employee-creation payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreateRequest {
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub employee_id: String,
    pub salary_structure: Option<SalaryStructure>,
}

/// Profile patch payload
///
/// Admin may set any field. A non-admin owner is restricted to the
/// allow-list applied by [`EmployeeProfileUpdate::restrict_to_owner_fields`];
/// everything else is dropped silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_structure: Option<SalaryStructure>,
}

impl EmployeeProfileUpdate {
    /// Reduce the patch to the owner-editable allow-list
    /// (`contact`, `profilePicture`); other fields are dropped silently
    pub fn restrict_to_owner_fields(self) -> Self {
        Self {
            contact: self.contact,
            profile_picture: self.profile_picture,
            ..Default::default()
        }
    }
}
