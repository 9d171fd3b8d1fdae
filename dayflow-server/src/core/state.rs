use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::UserRepository;
use crate::utils::AppError;

/// Server state shared across handlers
///
/// Cloning is cheap; the database handle and the JWT service are shared
/// references.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Build state from already-initialized parts (tests construct this
    /// directly over an in-memory database)
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Initialize the full state: work_dir layout, database, schema and the
    /// seeded Admin account
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_dir()).await?;
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self::new(config.clone(), db, jwt_service);
        state.seed_admin().await?;

        Ok(state)
    }

    /// Seed the Admin account when no user holds the configured email
    pub async fn seed_admin(&self) -> Result<(), AppError> {
        let users = UserRepository::new(self.db.clone());
        let created = users
            .ensure_admin(&self.config.admin_email, &self.config.admin_password)
            .await?;
        if created {
            tracing::info!(email = %self.config.admin_email, "Admin account seeded");
        }
        Ok(())
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
