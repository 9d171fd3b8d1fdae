//! Payroll API Handlers

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};

use crate::api::{caller_id, validate};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Payroll, PayrollGenerateRequest, PayrollView, UserId};
use crate::db::repository::{EmployeeProfileRepository, PayrollRepository};
use crate::utils::{ApiResponse, AppError, AppResult};

/// Generate a payroll slip for one user and period (Admin)
///
/// Snapshots the profile's current salary structure; later profile edits
/// never change issued slips.
pub async fn generate(
    State(state): State<ServerState>,
    Json(payload): Json<PayrollGenerateRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Payroll>>)> {
    validate(&payload)?;

    let user_id: UserId = payload
        .user_id
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid userId: {}", payload.user_id)))?;

    let profiles = EmployeeProfileRepository::new(state.db.clone());
    let profile = profiles
        .find_by_user(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee profile not found"))?;

    let repo = PayrollRepository::new(state.db.clone());
    let slip = repo
        .create(
            &user_id,
            &payload.month,
            payload.year,
            &profile.salary_structure,
        )
        .await?;

    tracing::info!(
        user_id = %payload.user_id,
        month = %payload.month,
        year = payload.year,
        net_salary = slip.net_salary,
        "Payroll slip generated"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(slip))))
}

/// The caller's slips, most recent period first
pub async fn my_slips(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<Payroll>>>> {
    let uid = caller_id(&user)?;
    let repo = PayrollRepository::new(state.db.clone());
    let slips = repo.find_by_user(&uid).await?;
    Ok(Json(ApiResponse::list(slips)))
}

/// All slips (Admin), newest created first
pub async fn all(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<PayrollView>>>> {
    let repo = PayrollRepository::new(state.db.clone());
    let slips = repo.find_all_views().await?;
    Ok(Json(ApiResponse::list(slips)))
}
