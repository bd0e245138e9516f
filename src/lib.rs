//! Notification Relay Server
//!
//! A small realtime relay: clients POST notifications over HTTP, the server
//! keeps the most recent ones in a bounded in-memory buffer and pushes each
//! one live to every connected dashboard over WebSocket.
//!
//! # Modules
//!
//! - `types`: Core data structures (NotificationRecord, HealthReport)
//! - `store`: Bounded, thread-safe notification buffer with id assignment
//! - `services`: Ingest (decode, store, broadcast) and query services
//! - `api`: Axum router, REST handlers, dashboard page, WebSocket hub
//! - `config`: Environment-driven server configuration
//! - `logging`: `tracing` subscriber setup
//! - `errors`: Error types
//! - `utils`: Timestamp helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use notif_relay::{AppState, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> notif_relay::RelayResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     let state = Arc::new(AppState::new(config));
//!     notif_relay::api::serve(listener, state, async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod services;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::websocket::{AppState, BroadcastHub, HubEvent, ViewerSession};
pub use config::ServerConfig;
pub use errors::{ConfigError, IngestError};
pub use services::{IngestService, QueryService};
pub use store::NotificationStore;
pub use types::{HealthReport, NotificationDraft, NotificationRecord, RelayResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
