//! Notification record types

use serde::{Deserialize, Serialize};

/// Source tag used when the payload has no usable `type`
pub const DEFAULT_SOURCE_TYPE: &str = "ANDROID";

/// Sender label used when the payload has no usable `sender`
pub const DEFAULT_SENDER: &str = "Android App";

/// Body used when the payload has no usable `content`
pub const DEFAULT_CONTENT: &str = "No content";

/// A stored notification. Immutable once created by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: u64,
    pub timestamp: String,
    #[serde(rename = "sourceType")]
    pub source_type: String,
    pub sender: String,
    pub content: String,
    #[serde(rename = "originAddress")]
    pub origin_address: String,
}

/// Normalized notification fields, before the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub source_type: String,
    pub sender: String,
    pub content: String,
    pub origin_address: String,
}

impl NotificationDraft {
    /// Create a draft with every field defaulted
    pub fn new(origin_address: impl Into<String>) -> Self {
        Self {
            source_type: DEFAULT_SOURCE_TYPE.to_string(),
            sender: DEFAULT_SENDER.to_string(),
            content: DEFAULT_CONTENT.to_string(),
            origin_address: origin_address.into(),
        }
    }

    /// Create a draft with explicit fields
    pub fn with_fields(
        source_type: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
        origin_address: impl Into<String>,
    ) -> Self {
        Self {
            source_type: source_type.into(),
            sender: sender.into(),
            content: content.into(),
            origin_address: origin_address.into(),
        }
    }

    /// Turn the draft into a record
    pub(crate) fn into_record(self, id: u64, timestamp: String) -> NotificationRecord {
        NotificationRecord {
            id,
            timestamp,
            source_type: self.source_type,
            sender: self.sender,
            content: self.content,
            origin_address: self.origin_address,
        }
    }
}
