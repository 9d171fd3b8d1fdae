//! Attendance API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Attendance router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/attendance", routes())
}

fn routes() -> Router<ServerState> {
    let caller_routes = Router::new()
        .route("/check-in", post(handler::check_in))
        .route("/check-out", post(handler::check_out))
        .route("/my-history", get(handler::my_history));

    let admin_routes = Router::new()
        .route("/all", get(handler::all))
        .layer(middleware::from_fn(require_admin));

    caller_routes.merge(admin_routes)
}
