//! WebSocket event types for live dashboard updates

use serde::{Deserialize, Serialize};

use crate::types::NotificationRecord;

/// Events pushed from the hub to dashboard viewers
///
/// Serialized as `{"event": "<name>", "data": <payload>}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum HubEvent {
    /// Sent once to a viewer right after it connects
    ServerInfo { url: String },

    /// A notification was just ingested
    NewNotification(NotificationRecord),
}

/// Client message types
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Application-level heartbeat
    Ping,
}

/// Pong response message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongMessage {
    pub event: String,
}

impl Default for PongMessage {
    fn default() -> Self {
        Self {
            event: "pong".to_string(),
        }
    }
}
