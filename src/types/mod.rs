//! Data types for the notification relay
//!
//! This module contains the core data structures shared by the store,
//! the broadcast hub and the HTTP layer.

mod health;
mod notification;

pub use health::HealthReport;
pub use notification::{
    NotificationDraft, NotificationRecord, DEFAULT_CONTENT, DEFAULT_SENDER, DEFAULT_SOURCE_TYPE,
};

/// Result type for process-level operations (bind, serve)
pub type RelayResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
