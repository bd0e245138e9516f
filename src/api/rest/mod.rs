//! REST API module for HTTP endpoints
//!
//! - `GET /` - Dashboard page
//! - `GET /api/notifications` - Held notifications, newest first
//! - `POST /api/send-notification` - Ingest one notification
//! - `GET /health` - Liveness report

pub mod dashboard;
pub mod health;
pub mod notifications;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard success wrapper: `{success: true, data}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// API error response: `{success: false, error}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}
