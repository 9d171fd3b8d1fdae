//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`ApiResponse`] - the `{ success, data, error, count }` response envelope
//! - logging and time helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod time;

pub use error::AppError;
pub use result::AppResult;

/// API response envelope
///
/// Every endpoint answers with this shape:
///
/// ```json
/// { "success": true, "data": { ... }, "count": 3 }
/// { "success": false, "error": "Profile not found" }
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            count: None,
            message: None,
        }
    }

    /// Successful response carrying a human-readable message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            count: None,
            message: Some(message.into()),
        }
    }

    /// Error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            count: None,
            message: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful list response; `count` mirrors the list length
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data: Some(data),
            error: None,
            count: Some(count),
            message: None,
        }
    }
}
