//! Authentication and authorization
//!
//! JWT bearer credentials plus role-based guards:
//!
//! - [`JwtService`] issues and validates tokens (HS256, 30-day validity)
//! - [`require_auth`] resolves the credential into a [`CurrentUser`]
//! - [`require_admin`] gates Admin-only routes

mod extractor;
mod jwt;
mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
