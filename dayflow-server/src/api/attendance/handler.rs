//! Attendance API Handlers
//!
//! "Today" is the server's local calendar day truncated to midnight,
//! computed at call time; callers cannot back-date.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};

use crate::api::caller_id;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Attendance, AttendanceView};
use crate::db::repository::AttendanceRepository;
use crate::utils::time::{now_millis, today_start_millis, work_duration_hours};
use crate::utils::{ApiResponse, AppError, AppResult};

/// Check in for today
pub async fn check_in(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<Attendance>>)> {
    let uid = caller_id(&user)?;
    let repo = AttendanceRepository::new(state.db.clone());

    let record = repo
        .check_in(&uid, today_start_millis(), now_millis())
        .await?;

    tracing::info!(user_id = %user.id, "Checked in");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(record))))
}

/// Check out for today, computing the work duration
pub async fn check_out(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Attendance>>> {
    let uid = caller_id(&user)?;
    let repo = AttendanceRepository::new(state.db.clone());

    let record = repo
        .find_by_user_and_date(&uid, today_start_millis())
        .await?
        .ok_or_else(|| AppError::conflict("No check-in record found for today"))?;

    if record.check_out.is_some() {
        return Err(AppError::conflict("Already checked out today"));
    }

    let id = record
        .id
        .ok_or_else(|| AppError::internal("Attendance record missing id"))?;

    let now = now_millis();
    let duration = work_duration_hours(record.check_in, now);
    let updated = repo.set_check_out(&id, now, duration).await?;

    tracing::info!(user_id = %user.id, work_duration = duration, "Checked out");

    Ok(Json(ApiResponse::success(updated)))
}

/// The caller's attendance history, newest day first
pub async fn my_history(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<Attendance>>>> {
    let uid = caller_id(&user)?;
    let repo = AttendanceRepository::new(state.db.clone());
    let records = repo.find_by_user(&uid).await?;
    Ok(Json(ApiResponse::list(records)))
}

/// All attendance records (Admin)
pub async fn all(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<AttendanceView>>>> {
    let repo = AttendanceRepository::new(state.db.clone());
    let records = repo.find_all_views().await?;
    Ok(Json(ApiResponse::list(records)))
}
