//! Employee Profile API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{caller_id, validate};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{
    AccountStatus, EmployeeCreateRequest, EmployeeProfile, EmployeeProfileUpdate,
    EmployeeProfileView, NewEmployee, Role, User, VerifyRequest,
};
use crate::db::repository::{EmployeeProfileRepository, UserRepository};
use crate::utils::{ApiResponse, AppError, AppResult};

/// Get the caller's own profile, joined with identity fields
///
/// 404 signals "complete your profile" to the client.
pub async fn my_profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<EmployeeProfileView>>> {
    let uid = caller_id(&user)?;
    let repo = EmployeeProfileRepository::new(state.db.clone());
    let profile = repo
        .find_view_by_user(&uid)
        .await?
        .ok_or_else(|| AppError::not_found("Profile not found"))?;

    Ok(Json(ApiResponse::success(profile)))
}

/// List all profiles (Admin)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<EmployeeProfileView>>>> {
    let repo = EmployeeProfileRepository::new(state.db.clone());
    let profiles = repo.find_all_views().await?;
    Ok(Json(ApiResponse::list(profiles)))
}

/// Create an identity + profile pair (Admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreateRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<EmployeeProfile>>)> {
    validate(&payload)?;

    let new_employee = NewEmployee {
        email: payload.email,
        password: payload.password,
        role: Role::Employee,
        status: AccountStatus::Pending,
        employee_id: payload.employee_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        job_title: payload.job_title.unwrap_or_else(|| "Pending".to_string()),
        department: payload
            .department
            .unwrap_or_else(|| "Unassigned".to_string()),
        salary_structure: payload.salary_structure.unwrap_or_default(),
    };

    let repo = EmployeeProfileRepository::new(state.db.clone());
    let profile = repo.create_with_user(new_employee).await?;

    tracing::info!(profile_id = ?profile.id, employee_id = %profile.employee_id, "Employee created");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(profile))))
}

/// Get a single profile (Admin or owner)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<EmployeeProfileView>>> {
    let repo = EmployeeProfileRepository::new(state.db.clone());
    let profile = repo
        .find_view_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    if !user.is_admin() && profile.user.to_string() != user.id {
        return Err(AppError::forbidden("Not authorized to view this profile"));
    }

    Ok(Json(ApiResponse::success(profile)))
}

/// Update a profile (Admin or owner)
///
/// A non-admin owner's patch is reduced to the `contact`/`profilePicture`
/// allow-list; other supplied fields are dropped silently.
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(mut payload): Json<EmployeeProfileUpdate>,
) -> AppResult<Json<ApiResponse<EmployeeProfile>>> {
    let repo = EmployeeProfileRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    if !user.is_admin() {
        if existing.user.to_string() != user.id {
            return Err(AppError::forbidden("Not authorized to update this profile"));
        }
        payload = payload.restrict_to_owner_fields();
    }

    let updated = repo.update(&id, payload).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// Delete a profile and its linked identity (Admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let repo = EmployeeProfileRepository::new(state.db.clone());
    repo.delete_cascade(&id).await?;

    tracing::info!(profile_id = %id, "Employee deleted (identity cascaded)");

    Ok(Json(ApiResponse::success(serde_json::json!({}))))
}

/// Set the verification status of a profile's identity (Admin)
pub async fn verify(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<VerifyRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    if payload.status == AccountStatus::Pending {
        return Err(AppError::validation(
            "Status must be 'active' or 'rejected'",
        ));
    }

    let profiles = EmployeeProfileRepository::new(state.db.clone());
    let profile = profiles
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    let users = UserRepository::new(state.db.clone());
    let updated = users.set_status(&profile.user, payload.status).await?;

    tracing::info!(
        user_id = %profile.user,
        status = ?payload.status,
        "Account verification decided"
    );

    Ok(Json(ApiResponse::success(updated)))
}
