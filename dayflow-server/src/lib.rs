//! Dayflow Server - HR management backend
//!
//! # Overview
//!
//! REST API over an embedded SurrealDB store:
//!
//! - **Authentication** (`auth`): JWT + Argon2 identity gate with
//!   Admin/Employee roles and a verification status machine
//! - **Employee profiles** (`api::employees`): HR metadata tied 1:1 to
//!   an identity
//! - **Attendance** (`api::attendance`): one check-in/check-out pair per
//!   user per calendar day
//! - **Leave requests** (`api::leaves`): application queue with Admin
//!   approval decisions
//! - **Payroll** (`api::payroll`): point-in-time salary slip snapshots
//!
//! # Module structure
//!
//! ```text
//! dayflow-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── auth/          # JWT service, middleware, extractor
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! └── utils/         # errors, envelope, logging, time
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
