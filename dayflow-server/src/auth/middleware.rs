//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role-based authorization.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Routes that never require a credential
fn is_public_api_route(path: &str) -> bool {
    matches!(
        path,
        "/api/auth/login" | "/api/auth/register" | "/api/health"
    )
}

/// Authentication middleware
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`.
/// On success the resolved [`CurrentUser`] is injected into the request
/// extensions. OPTIONS requests, non-`/api/` paths, and the public routes
/// (login, register, health) skip authentication.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight passes through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through to their own handling (404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "Authentication failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Admin authorization middleware
///
/// Requires an already-authenticated caller with `role == "Admin"`.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;

    if !user.is_admin() {
        tracing::warn!(
            target: "security",
            user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "Admin role required"
        );
        return Err(AppError::forbidden(format!(
            "Role '{}' is not authorized to access this route",
            user.role
        )));
    }

    Ok(next.run(req).await)
}
