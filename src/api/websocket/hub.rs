//! Broadcast hub for dashboard viewers
//!
//! Every connected viewer gets a bounded queue registered under a session id.
//! `publish` copies the registry under a short read lock and then delivers
//! with `try_send`, so a slow or vanished viewer never stalls the others or
//! the ingest path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use super::events::HubEvent;
use crate::types::NotificationRecord;

/// Per-viewer queue depth before events start being dropped
pub const SESSION_QUEUE_CAPACITY: usize = 64;

/// Opaque identifier of a connected viewer
pub type SessionId = u64;

/// Receiving end of one viewer's queue. Dropping it disconnects the viewer
/// from delivery; the hub prunes it on the next publish.
pub struct ViewerSession {
    id: SessionId,
    rx: mpsc::Receiver<HubEvent>,
}

impl ViewerSession {
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Wait for the next event. `None` once the hub has dropped this session.
    pub async fn recv(&mut self) -> Option<HubEvent> {
        self.rx.recv().await
    }

    /// Take the next queued event without waiting
    pub fn try_recv(&mut self) -> Option<HubEvent> {
        self.rx.try_recv().ok()
    }
}

/// Registry of connected viewers with best-effort fan-out
pub struct BroadcastHub {
    sessions: RwLock<HashMap<SessionId, mpsc::Sender<HubEvent>>>,
    next_session_id: AtomicU64,
    advertised_url: String,
    queue_capacity: usize,
}

impl BroadcastHub {
    /// Create a hub that advertises `advertised_url` to new viewers
    pub fn new(advertised_url: impl Into<String>) -> Self {
        Self::with_queue_capacity(advertised_url, SESSION_QUEUE_CAPACITY)
    }

    /// Create a hub with a custom per-viewer queue depth
    pub fn with_queue_capacity(advertised_url: impl Into<String>, queue_capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            next_session_id: AtomicU64::new(0),
            advertised_url: advertised_url.into(),
            queue_capacity: queue_capacity.max(1),
        }
    }

    /// Register a new viewer. Its first queued event is always `server_info`.
    pub fn connect(&self) -> ViewerSession {
        let id = self.next_session_id.fetch_add(1, Ordering::SeqCst) + 1;
        let (tx, rx) = mpsc::channel(self.queue_capacity);

        // Fresh queue has room, so this cannot fail
        let _ = tx.try_send(HubEvent::ServerInfo {
            url: self.advertised_url.clone(),
        });

        self.sessions.write().insert(id, tx);
        debug!(session_id = id, "viewer registered");

        ViewerSession { id, rx }
    }

    /// Deregister a viewer. Unknown ids are ignored.
    pub fn disconnect(&self, session_id: SessionId) {
        if self.sessions.write().remove(&session_id).is_some() {
            debug!(session_id, "viewer deregistered");
        }
    }

    /// Queue `record` for every registered viewer.
    ///
    /// Returns how many viewers it was queued for. Per-viewer failures are
    /// logged and never returned.
    pub fn publish(&self, record: &NotificationRecord) -> usize {
        let targets: Vec<(SessionId, mpsc::Sender<HubEvent>)> = self
            .sessions
            .read()
            .iter()
            .map(|(id, tx)| (*id, tx.clone()))
            .collect();

        let mut delivered = 0;
        let mut stale = Vec::new();

        for (session_id, tx) in targets {
            match tx.try_send(HubEvent::NewNotification(record.clone())) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(
                        session_id,
                        notification_id = record.id,
                        "viewer queue full, dropping notification"
                    );
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(session_id, "viewer gone, pruning session");
                    stale.push(session_id);
                }
            }
        }

        if !stale.is_empty() {
            let mut sessions = self.sessions.write();
            for session_id in stale {
                sessions.remove(&session_id);
            }
        }

        delivered
    }

    /// Number of registered viewers
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    /// URL sent to viewers in `server_info`
    pub fn advertised_url(&self) -> &str {
        &self.advertised_url
    }
}
