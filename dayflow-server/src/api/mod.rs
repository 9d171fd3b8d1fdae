//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - registration, login, current identity
//! - [`employees`] - profile management and verification
//! - [`attendance`] - daily check-in/check-out
//! - [`leaves`] - leave applications and decisions
//! - [`payroll`] - payroll slip generation and history

pub mod attendance;
pub mod auth;
pub mod employees;
pub mod health;
pub mod leaves;
pub mod payroll;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use validator::Validate;

use crate::auth::{CurrentUser, require_auth};
use crate::core::ServerState;
use crate::db::models::UserId;
use crate::utils::{AppError, AppResult};

/// Build the application router
///
/// `require_auth` guards every `/api/` route except the public allow-list;
/// Admin-only routes carry an additional `require_admin` layer inside
/// their resource router.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(employees::router())
        .merge(attendance::router())
        .merge(leaves::router())
        .merge(payroll::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Parse the caller's token subject ("user:key") into a record id
pub(crate) fn caller_id(user: &CurrentUser) -> AppResult<UserId> {
    user.id
        .parse()
        .map_err(|_| AppError::invalid_token("Malformed token subject"))
}

/// Run derive-based payload validation, surfacing the first message
pub(crate) fn validate(payload: &impl Validate) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_values()
            .flatten()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid request body".to_string());
        AppError::validation(message)
    })
}
