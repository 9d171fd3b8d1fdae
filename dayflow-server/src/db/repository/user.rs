//! User Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{AccountStatus, Role, User, UserId};
use crate::utils::time::now_millis;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find a user by id ("user:key")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let user: Option<User> = self.base.db().select(thing).await?;
        Ok(user)
    }

    /// Set a user's verification status
    pub async fn set_status(&self, id: &UserId, status: AccountStatus) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $user SET status = $status RETURN AFTER")
            .bind(("user", id.clone()))
            .bind(("status", status))
            .await?;
        result
            .take::<Option<User>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }

    /// Seed the Admin account if no user exists with the given email.
    /// Returns true when an account was created.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> RepoResult<bool> {
        if self.find_by_email(email).await?.is_some() {
            return Ok(false);
        }

        let password_hash = User::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        self.base
            .db()
            .query(
                r#"CREATE user SET
                    email = $email,
                    passwordHash = $hash,
                    role = $role,
                    status = $status,
                    createdAt = $now"#,
            )
            .bind(("email", email.to_string()))
            .bind(("hash", password_hash))
            .bind(("role", Role::Admin))
            .bind(("status", AccountStatus::Active))
            .bind(("now", now_millis()))
            .await?
            .check()?;

        Ok(true)
    }
}
