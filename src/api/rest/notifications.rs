//! Notification endpoints

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::{ApiError, ApiResponse};
use crate::api::websocket::state::AppState;
use crate::types::NotificationRecord;

/// Origin recorded when no peer address is available
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// Response for POST /api/send-notification
#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub id: u64,
}

/// GET /api/notifications - All held notifications, newest first
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<NotificationRecord>>> {
    Json(ApiResponse::new(state.query.list_all()))
}

/// POST /api/send-notification - Store a notification and push it to dashboards
///
/// The body is read raw so that anything other than a JSON object becomes
/// a `400 {success: false, error}` instead of an extractor rejection.
pub async fn send_notification(
    State(state): State<Arc<AppState>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let origin = client_address(&headers, connect_info.map(|ConnectInfo(addr)| addr));

    match state.ingest.receive(&body, &origin) {
        Ok(record) => Json(SendResponse {
            success: true,
            id: record.id,
        })
        .into_response(),
        Err(e) => ApiError::bad_request(e.to_string()).into_response(),
    }
}

/// Caller address: first `X-Forwarded-For` hop, then the TCP peer
pub fn client_address(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match (forwarded, peer) {
        (Some(addr), _) => addr.to_string(),
        (None, Some(peer)) => peer.ip().to_string(),
        (None, None) => UNKNOWN_ORIGIN.to_string(),
    }
}
