//! User Model
//!
//! The identity record: credentials, role, and verification status.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// User ID type
pub type UserId = RecordId;

/// Role of an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }
}

/// Verification status gate on non-Admin login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Active,
    Rejected,
}

/// User model matching the `user` table
///
/// The password hash is never serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UserId>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: i64,
}

impl User {
    /// Verify a password against the stored argon2 hash
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password with argon2 and a random salt
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Reduced identity view returned at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub password: String,
}

/// Verification decision payload (Admin)
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub status: AccountStatus,
}
