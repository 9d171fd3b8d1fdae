//! Authentication Handlers
//!
//! Registration, login and the current-identity lookup.

use std::time::Duration;

use axum::{Extension, Json, extract::State, http::StatusCode, http::header};
use serde::{Deserialize, Serialize};

use crate::api::validate;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{
    AccountStatus, LoginRequest, NewEmployee, RegisterRequest, Role, SalaryStructure, User,
    UserView,
};
use crate::db::repository::{EmployeeProfileRepository, UserRepository};
use crate::utils::time::now_millis;
use crate::utils::{ApiResponse, AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login response: the token plus a reduced identity view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserView,
}

/// Register handler
///
/// Creates a pending Employee identity and its profile in one transaction.
/// Missing profile fields fall back to placeholder defaults; no credential
/// is issued.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    validate(&payload)?;

    let new_employee = NewEmployee {
        email: payload.email,
        password: payload.password,
        role: Role::Employee,
        status: AccountStatus::Pending,
        employee_id: payload
            .employee_id
            .unwrap_or_else(|| format!("EMP-{}", now_millis())),
        first_name: payload.first_name.unwrap_or_else(|| "New".to_string()),
        last_name: payload.last_name.unwrap_or_else(|| "User".to_string()),
        job_title: "Pending".to_string(),
        department: "Unassigned".to_string(),
        salary_structure: SalaryStructure::default(),
    };

    let profiles = EmployeeProfileRepository::new(state.db.clone());
    let profile = profiles.create_with_user(new_employee).await?;

    tracing::info!(
        profile_id = ?profile.id,
        employee_id = %profile.employee_id,
        "New registration pending verification"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(
            "Account created successfully. Your account is pending HR verification.",
        )),
    ))
}

/// Login handler
///
/// Verifies credentials and the account status gate, then issues a JWT.
/// The token is also mirrored into an httpOnly cookie; the Authorization
/// header remains the enforced channel.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<([(header::HeaderName, String); 1], Json<LoginResponse>)> {
    validate(&payload)?;

    let users = UserRepository::new(state.db.clone());
    let user = users.find_by_email(&payload.email).await?;

    // Fixed delay to prevent timing attacks (before checking the result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error for unknown email and wrong password
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&payload.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
            if !password_valid {
                tracing::warn!(target: "security", email = %payload.email, "Login failed - wrong password");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            tracing::warn!(target: "security", email = %payload.email, "Login failed - unknown email");
            return Err(AppError::invalid_credentials());
        }
    };

    // Status gate applies to everyone except Admins
    if user.role != Role::Admin {
        match user.status {
            AccountStatus::Pending => {
                return Err(AppError::forbidden(
                    "Your account is pending HR verification.",
                ));
            }
            AccountStatus::Rejected => {
                return Err(AppError::forbidden("Your account has been rejected."));
            }
            AccountStatus::Active => {}
        }
    }

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&user_id, &user.email, user.role.as_str())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, email = %user.email, role = %user.role.as_str(), "User logged in");

    let cookie = format!(
        "token={}; Max-Age={}; Path=/; HttpOnly",
        token,
        jwt_service.expiration_seconds()
    );

    let response = LoginResponse {
        success: true,
        token,
        user: UserView::from(&user),
    };

    Ok(([(header::SET_COOKIE, cookie)], Json(response)))
}

/// Current identity handler
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<User>>> {
    let users = UserRepository::new(state.db.clone());
    // The token may outlive the account; treat a missing record as an
    // invalid credential
    let record = users
        .find_by_id(&user.id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    Ok(Json(ApiResponse::success(record)))
}
