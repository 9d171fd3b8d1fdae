//! Employee Profile API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Employee profile router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // Caller routes: ownership checks happen inside the handlers
    let caller_routes = Router::new()
        .route("/me", get(handler::my_profile))
        .route("/{id}", get(handler::get_by_id).put(handler::update));

    // Admin-only routes
    let admin_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::delete))
        .route("/{id}/verify", put(handler::verify))
        .layer(middleware::from_fn(require_admin));

    caller_routes.merge(admin_routes)
}
