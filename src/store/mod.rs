//! Notification Store - bounded in-memory buffer
//!
//! Holds the most recent notifications in insertion order and owns id
//! assignment. Id counter and buffer live behind a single lock so the
//! visible id sequence always equals insertion order.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::types::{NotificationDraft, NotificationRecord};
use crate::utils::time::record_timestamp;

/// Number of records kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 100;

struct StoreInner {
    records: VecDeque<NotificationRecord>,
    last_id: u64,
}

/// Bounded, thread-safe notification buffer
pub struct NotificationStore {
    inner: Mutex<StoreInner>,
    capacity: usize,
}

impl NotificationStore {
    /// Create a store holding up to `DEFAULT_CAPACITY` records
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a store with a custom capacity (at least one record)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Mutex::new(StoreInner {
                records: VecDeque::with_capacity(capacity + 1),
                last_id: 0,
            }),
            capacity,
        }
    }

    /// Store a new record at the tail, evicting the oldest when over capacity
    pub fn append(&self, draft: NotificationDraft) -> NotificationRecord {
        let mut inner = self.inner.lock();

        inner.last_id += 1;
        let record = draft.into_record(inner.last_id, record_timestamp());
        inner.records.push_back(record.clone());

        // One insert can overflow by at most one
        if inner.records.len() > self.capacity {
            inner.records.pop_front();
        }

        record
    }

    /// Point-in-time copy of all held records, newest first
    pub fn snapshot(&self) -> Vec<NotificationRecord> {
        let inner = self.inner.lock();
        inner.records.iter().rev().cloned().collect()
    }

    /// Number of records currently held
    pub fn count(&self) -> usize {
        self.inner.lock().records.len()
    }

    /// Highest id assigned so far (not capped by eviction)
    pub fn last_id(&self) -> u64 {
        self.inner.lock().last_id
    }

    /// Maximum number of records held at once
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn draft(n: usize) -> NotificationDraft {
        NotificationDraft::with_fields("TEST", "tester", format!("message {}", n), "127.0.0.1")
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let store = NotificationStore::new();

        let first = store.append(draft(1));
        let second = store.append(draft(2));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.content, "message 2");
        assert!(!second.timestamp.is_empty());
    }

    #[test]
    fn test_snapshot_is_newest_first_under_capacity() {
        let store = NotificationStore::new();
        for i in 0..42 {
            store.append(draft(i));
        }

        let ids: Vec<u64> = store.snapshot().iter().map(|r| r.id).collect();
        let expected: Vec<u64> = (1..=42).rev().collect();
        assert_eq!(ids, expected);
        assert_eq!(store.count(), 42);
    }

    #[test]
    fn test_eviction_keeps_most_recent_hundred() {
        let store = NotificationStore::new();
        for i in 0..250 {
            store.append(draft(i));
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot.first().unwrap().id, 250);
        assert_eq!(snapshot.last().unwrap().id, 151);
        assert_eq!(store.count(), 100);
        assert_eq!(store.last_id(), 250);

        // Counter keeps going after eviction
        assert_eq!(store.append(draft(250)).id, 251);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_appends() {
        let store = NotificationStore::with_capacity(2);
        store.append(draft(1));
        store.append(draft(2));

        let before = store.snapshot();
        store.append(draft(3));

        assert_eq!(before.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(store.snapshot().iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let store = NotificationStore::with_capacity(0);
        store.append(draft(1));
        store.append(draft(2));
        assert_eq!(store.capacity(), 1);
        assert_eq!(store.snapshot()[0].id, 2);
    }

    #[test]
    fn test_concurrent_appends_have_no_duplicate_or_skipped_ids() {
        let store = Arc::new(NotificationStore::new());
        let threads = 8;
        let per_thread = 50;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..per_thread)
                        .map(|i| store.append(draft(t * per_thread + i)).id)
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {}", id);
            }
        }

        let total = (threads * per_thread) as u64;
        assert_eq!(ids.len() as u64, total);
        assert_eq!(ids.iter().copied().min(), Some(1));
        assert_eq!(ids.iter().copied().max(), Some(total));
        assert_eq!(store.count(), 100);
        assert_eq!(store.last_id(), total);

        // Storage order is insertion order
        let snapshot = store.snapshot();
        assert!(snapshot.windows(2).all(|w| w[0].id == w[1].id + 1));
        assert_eq!(snapshot[0].id, total);
    }
}
