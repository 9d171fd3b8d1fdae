//! Employee Profile Repository
//!
//! Profiles are created and deleted together with their user record inside
//! a single transaction, so a credential never exists without a profile or
//! the other way round.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult, map_unique_violation};
use crate::db::models::{
    EmployeeProfile, EmployeeProfileUpdate, EmployeeProfileView, NewEmployee, User, UserId,
};
use crate::utils::time::now_millis;

const DUPLICATE_MSG: &str = "Email or Employee ID already exists";

const VIEW_FIELDS: &str =
    "*, user.email AS email, user.role AS role, user.status AS status";

#[derive(Clone)]
pub struct EmployeeProfileRepository {
    base: BaseRepository,
}

impl EmployeeProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a profile by id ("employee_profile:key")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeProfile>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let profile: Option<EmployeeProfile> = self.base.db().select(thing).await?;
        Ok(profile)
    }

    /// Find a profile by id, joined with the user's identity fields
    pub async fn find_view_by_id(&self, id: &str) -> RepoResult<Option<EmployeeProfileView>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let mut result = self
            .base
            .db()
            .query(format!("SELECT {} FROM $profile", VIEW_FIELDS))
            .bind(("profile", thing))
            .await?;
        let views: Vec<EmployeeProfileView> = result.take(0)?;
        Ok(views.into_iter().next())
    }

    /// Find the profile owned by a user
    pub async fn find_by_user(&self, user: &UserId) -> RepoResult<Option<EmployeeProfile>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee_profile WHERE user = $user LIMIT 1")
            .bind(("user", user.clone()))
            .await?;
        let profiles: Vec<EmployeeProfile> = result.take(0)?;
        Ok(profiles.into_iter().next())
    }

    /// Find the profile owned by a user, joined with identity fields
    pub async fn find_view_by_user(
        &self,
        user: &UserId,
    ) -> RepoResult<Option<EmployeeProfileView>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {} FROM employee_profile WHERE user = $user LIMIT 1",
                VIEW_FIELDS
            ))
            .bind(("user", user.clone()))
            .await?;
        let views: Vec<EmployeeProfileView> = result.take(0)?;
        Ok(views.into_iter().next())
    }

    /// Find a profile by its human-facing employee id
    pub async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> RepoResult<Option<EmployeeProfile>> {
        let employee_id_owned = employee_id.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee_profile WHERE employeeId = $employee_id LIMIT 1")
            .bind(("employee_id", employee_id_owned))
            .await?;
        let profiles: Vec<EmployeeProfile> = result.take(0)?;
        Ok(profiles.into_iter().next())
    }

    /// All profiles joined with identity fields
    pub async fn find_all_views(&self) -> RepoResult<Vec<EmployeeProfileView>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {} FROM employee_profile ORDER BY createdAt DESC",
                VIEW_FIELDS
            ))
            .await?;
        let views: Vec<EmployeeProfileView> = result.take(0)?;
        Ok(views)
    }

    /// Create a user and its profile in one transaction
    ///
    /// Duplicate email or employee id fails with `Duplicate`; any failure
    /// inside the transaction rolls back both records.
    pub async fn create_with_user(&self, data: NewEmployee) -> RepoResult<EmployeeProfile> {
        // Friendly pre-checks; the unique indexes remain the real guard
        if self.user_email_exists(&data.email).await? {
            return Err(RepoError::Duplicate(DUPLICATE_MSG.to_string()));
        }
        if self.find_by_employee_id(&data.employee_id).await?.is_some() {
            return Err(RepoError::Duplicate(DUPLICATE_MSG.to_string()));
        }

        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let user_id = RecordId::from_table_key("user", Uuid::new_v4().simple().to_string());
        let profile_id =
            RecordId::from_table_key("employee_profile", Uuid::new_v4().simple().to_string());
        let now = now_millis();

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                CREATE $user_id SET
                    email = $email,
                    passwordHash = $hash,
                    role = $role,
                    status = $status,
                    createdAt = $now;
                CREATE $profile_id SET
                    user = $user_id,
                    employeeId = $employee_id,
                    firstName = $first_name,
                    lastName = $last_name,
                    jobTitle = $job_title,
                    department = $department,
                    dateOfJoining = $now,
                    profilePicture = $picture,
                    contact = $contact,
                    salaryStructure = $salary,
                    createdAt = $now;
                COMMIT TRANSACTION;"#,
            )
            .bind(("user_id", user_id))
            .bind(("profile_id", profile_id.clone()))
            .bind(("email", data.email))
            .bind(("hash", password_hash))
            .bind(("role", data.role))
            .bind(("status", data.status))
            .bind(("employee_id", data.employee_id))
            .bind(("first_name", data.first_name))
            .bind(("last_name", data.last_name))
            .bind(("job_title", data.job_title))
            .bind(("department", data.department))
            .bind((
                "picture",
                crate::db::models::employee_profile::DEFAULT_PROFILE_PICTURE.to_string(),
            ))
            .bind(("contact", crate::db::models::Contact::default()))
            .bind(("salary", data.salary_structure))
            .bind(("now", now))
            .await?
            .check()
            .map_err(|e| map_unique_violation(e, DUPLICATE_MSG))?;

        let created: Option<EmployeeProfile> = self.base.db().select(profile_id).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee profile".to_string()))
    }

    /// Patch a profile (document merge; nested objects merge deeply)
    pub async fn update(
        &self,
        id: &str,
        data: EmployeeProfileUpdate,
    ) -> RepoResult<EmployeeProfile> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let patch = serde_json::to_value(&data)
            .map_err(|e| RepoError::Validation(format!("Invalid patch: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $profile MERGE $patch RETURN AFTER")
            .bind(("profile", thing))
            .bind(("patch", patch))
            .await
            .map_err(|e| map_unique_violation(e, DUPLICATE_MSG))?;

        result
            .take::<Option<EmployeeProfile>>(0)
            .map_err(|e| map_unique_violation(e, DUPLICATE_MSG))?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Delete a profile and cascade the linked user deletion, atomically
    pub async fn delete_cascade(&self, id: &str) -> RepoResult<bool> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        let profile_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                DELETE $profile_id;
                DELETE $user_id;
                COMMIT TRANSACTION;"#,
            )
            .bind(("profile_id", profile_id))
            .bind(("user_id", existing.user))
            .await?
            .check()?;

        Ok(true)
    }

    async fn user_email_exists(&self, email: &str) -> RepoResult<bool> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT email FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let rows: Vec<serde_json::Value> = result.take(0)?;
        Ok(!rows.is_empty())
    }
}
