//! Health Check Handler

use axum::Json;

use crate::utils::ApiResponse;

/// Liveness check, no auth required
pub async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(serde_json::json!({
        "status": "ok",
        "service": "dayflow-server",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
