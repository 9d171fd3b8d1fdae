//! Authentication Routes

mod handler;

pub use handler::LoginResponse;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Build authentication router
/// - /api/auth/register, /api/auth/login: public (on the auth middleware allow-list)
/// - /api/auth/me: protected by the global require_auth middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/register", post(handler::register))
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
}
