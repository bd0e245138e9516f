//! Health report type

use serde::{Deserialize, Serialize};

/// Liveness snapshot returned by `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub time: String,
    pub total_notif: usize,
    pub server_url: String,
}
