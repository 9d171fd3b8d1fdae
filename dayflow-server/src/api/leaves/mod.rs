//! Leave Request API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Leave request router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leaves", routes())
}

fn routes() -> Router<ServerState> {
    let caller_routes = Router::new()
        .route("/", post(handler::apply))
        .route("/my-leaves", get(handler::my_leaves));

    let admin_routes = Router::new()
        .route("/all", get(handler::all))
        .route("/{id}", put(handler::decide))
        .layer(middleware::from_fn(require_admin));

    caller_routes.merge(admin_routes)
}
