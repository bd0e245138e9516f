//! Shared application state

use std::sync::Arc;

use super::hub::BroadcastHub;
use crate::config::ServerConfig;
use crate::services::{IngestService, QueryService};
use crate::store::NotificationStore;

/// State handed to every HTTP and WebSocket handler
pub struct AppState {
    /// Process configuration
    pub config: ServerConfig,

    /// Bounded notification buffer
    pub store: Arc<NotificationStore>,

    /// Registry of connected dashboard viewers
    pub hub: Arc<BroadcastHub>,

    pub ingest: IngestService,
    pub query: QueryService,
}

impl AppState {
    /// Build the store, hub and services for `config`
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(NotificationStore::with_capacity(config.store_capacity));
        let hub = Arc::new(BroadcastHub::new(config.advertised_url.clone()));
        Self::with_parts(config, store, hub)
    }

    /// Assemble state around an existing store and hub
    pub fn with_parts(
        config: ServerConfig,
        store: Arc<NotificationStore>,
        hub: Arc<BroadcastHub>,
    ) -> Self {
        let ingest = IngestService::new(Arc::clone(&store), Arc::clone(&hub));
        let query = QueryService::new(Arc::clone(&store), config.advertised_url.clone());

        Self {
            config,
            store,
            hub,
            ingest,
            query,
        }
    }
}
