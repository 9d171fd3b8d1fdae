//! Leave Request API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{caller_id, validate};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{
    LeaveApplyRequest, LeaveDecisionRequest, LeaveRequest, LeaveRequestView, LeaveStatus,
};
use crate::db::repository::LeaveRequestRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// Apply for leave
///
/// No overlap validation against existing leave is performed.
pub async fn apply(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<LeaveApplyRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<LeaveRequest>>)> {
    validate(&payload)?;

    let uid = caller_id(&user)?;
    let repo = LeaveRequestRepository::new(state.db.clone());
    let leave = repo.create(&uid, payload).await?;

    tracing::info!(user_id = %user.id, leave_id = ?leave.id, "Leave requested");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(leave))))
}

/// The caller's leave requests, newest created first
pub async fn my_leaves(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<LeaveRequest>>>> {
    let uid = caller_id(&user)?;
    let repo = LeaveRequestRepository::new(state.db.clone());
    let leaves = repo.find_by_user(&uid).await?;
    Ok(Json(ApiResponse::list(leaves)))
}

/// All leave requests (Admin)
pub async fn all(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<LeaveRequestView>>>> {
    let repo = LeaveRequestRepository::new(state.db.clone());
    let leaves = repo.find_all_views().await?;
    Ok(Json(ApiResponse::list(leaves)))
}

/// Decide a leave request (Admin)
///
/// An already-decided request may be re-decided; the new decision
/// overwrites the old one.
pub async fn decide(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LeaveDecisionRequest>,
) -> AppResult<Json<ApiResponse<LeaveRequest>>> {
    if payload.status == LeaveStatus::Pending {
        return Err(AppError::validation(
            "Status must be 'Approved' or 'Rejected'",
        ));
    }

    let repo = LeaveRequestRepository::new(state.db.clone());
    let leave = repo.decide(&id, payload).await?;

    tracing::info!(leave_id = %id, status = ?leave.status, "Leave request decided");

    Ok(Json(ApiResponse::success(leave)))
}
