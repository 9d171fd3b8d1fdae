use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// Every item can be overridden through environment variables:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/dayflow | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | ADMIN_EMAIL | admin@dayflow.com | Seeded Admin account email |
/// | ADMIN_PASSWORD | admin123 | Seeded Admin account password |
/// | JWT_SECRET | (generated in debug) | HS256 signing secret, min 32 chars |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Seeded Admin account
    pub admin_email: String,
    pub admin_password: String,
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/dayflow".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@dayflow.com".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
            jwt: JwtConfig::default(),
        }
    }

    /// Override work_dir and port, for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding the rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work_dir layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
