//! Read-only access to the notification store

use std::sync::Arc;

use crate::store::NotificationStore;
use crate::types::{HealthReport, NotificationRecord};
use crate::utils::time::iso8601_now;

/// Status string reported while the process is serving
pub const STATUS_ALIVE: &str = "ALIVE";

/// Snapshot and health queries over the store
pub struct QueryService {
    store: Arc<NotificationStore>,
    advertised_url: String,
}

impl QueryService {
    pub fn new(store: Arc<NotificationStore>, advertised_url: impl Into<String>) -> Self {
        Self {
            store,
            advertised_url: advertised_url.into(),
        }
    }

    /// All held notifications, newest first
    pub fn list_all(&self) -> Vec<NotificationRecord> {
        self.store.snapshot()
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: STATUS_ALIVE.to_string(),
            time: iso8601_now(),
            total_notif: self.store.count(),
            server_url: self.advertised_url.clone(),
        }
    }
}
