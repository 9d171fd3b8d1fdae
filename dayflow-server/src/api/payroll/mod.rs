//! Payroll API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Payroll router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payroll", routes())
}

fn routes() -> Router<ServerState> {
    let caller_routes = Router::new().route("/my-slips", get(handler::my_slips));

    let admin_routes = Router::new()
        .route("/generate", post(handler::generate))
        .route("/all", get(handler::all))
        .layer(middleware::from_fn(require_admin));

    caller_routes.merge(admin_routes)
}
