//! Health endpoint

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::websocket::state::AppState;
use crate::types::HealthReport;

/// GET /health - Liveness, current time and stored notification count
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(state.query.health())
}
