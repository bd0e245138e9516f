//! WebSocket module for live dashboard updates
//!
//! Provides the `/ws` endpoint. Each connection becomes a viewer session in
//! the [`hub::BroadcastHub`]:
//! - `server_info` on connect, carrying the advertised server URL
//! - `new_notification` for every ingested notification
//! - `{"event":"ping"}` from the client is answered with `{"event":"pong"}`

pub mod events;
pub mod handler;
pub mod hub;
pub mod state;

// Re-export commonly used items
pub use events::HubEvent;
pub use hub::{BroadcastHub, SessionId, ViewerSession, SESSION_QUEUE_CAPACITY};
pub use state::AppState;
