//! Inbound notification handling
//!
//! Decoding is schema-tolerant: only a body that is not a JSON object is
//! rejected. Missing or non-string fields fall back to their defaults.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::api::websocket::hub::BroadcastHub;
use crate::errors::IngestError;
use crate::store::NotificationStore;
use crate::types::{
    NotificationDraft, NotificationRecord, DEFAULT_CONTENT, DEFAULT_SENDER, DEFAULT_SOURCE_TYPE,
};

/// Decode a raw request body into a draft with defaults applied
pub fn decode_payload(raw: &[u8], origin_address: &str) -> Result<NotificationDraft, IngestError> {
    let value: Value = serde_json::from_slice(raw)
        .map_err(|e| IngestError::MalformedPayload(format!("body is not valid JSON: {}", e)))?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(IngestError::MalformedPayload(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    Ok(NotificationDraft::with_fields(
        string_field(&fields, "type", DEFAULT_SOURCE_TYPE),
        string_field(&fields, "sender", DEFAULT_SENDER),
        string_field(&fields, "content", DEFAULT_CONTENT),
        origin_address,
    ))
}

fn string_field(fields: &Map<String, Value>, key: &str, default: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Stores inbound notifications and fans them out to viewers
pub struct IngestService {
    store: Arc<NotificationStore>,
    hub: Arc<BroadcastHub>,
}

impl IngestService {
    pub fn new(store: Arc<NotificationStore>, hub: Arc<BroadcastHub>) -> Self {
        Self { store, hub }
    }

    /// Accept one raw payload from `remote_address`.
    ///
    /// On success the record is stored and pushed to every connected viewer
    /// before it is returned. Rejected payloads leave the store untouched.
    pub fn receive(
        &self,
        raw: &[u8],
        remote_address: &str,
    ) -> Result<NotificationRecord, IngestError> {
        info!(
            origin = remote_address,
            payload = %String::from_utf8_lossy(raw),
            "inbound notification"
        );

        let draft = decode_payload(raw, remote_address).map_err(|e| {
            warn!(origin = remote_address, error = %e, "rejected notification");
            e
        })?;

        let record = self.store.append(draft);
        let delivered = self.hub.publish(&record);
        info!(id = record.id, viewers = delivered, "notification stored and broadcast");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::websocket::events::HubEvent;

    fn service() -> (IngestService, Arc<NotificationStore>, Arc<BroadcastHub>) {
        let store = Arc::new(NotificationStore::new());
        let hub = Arc::new(BroadcastHub::new("http://localhost:5000"));
        let service = IngestService::new(Arc::clone(&store), Arc::clone(&hub));
        (service, store, hub)
    }

    #[test]
    fn test_decode_full_payload() {
        let draft = decode_payload(
            br#"{"type":"SMS","sender":"Bank","content":"Your OTP is 1234"}"#,
            "10.0.0.7",
        )
        .unwrap();

        assert_eq!(
            draft,
            NotificationDraft::with_fields("SMS", "Bank", "Your OTP is 1234", "10.0.0.7")
        );
    }

    #[test]
    fn test_decode_empty_object_uses_defaults() {
        let draft = decode_payload(b"{}", "10.0.0.7").unwrap();
        assert_eq!(draft.source_type, "ANDROID");
        assert_eq!(draft.sender, "Android App");
        assert_eq!(draft.content, "No content");
        assert_eq!(draft.origin_address, "10.0.0.7");
    }

    #[test]
    fn test_decode_wrong_field_types_are_defaulted() {
        let draft =
            decode_payload(br#"{"type":42,"sender":null,"content":["a"],"extra":true}"#, "x")
                .unwrap();
        assert_eq!(draft, NotificationDraft::new("x"));
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        let bodies: [&[u8]; 6] = [br#""just a string""#, b"[1,2,3]", b"17", b"null", b"not json", b""];
        for body in bodies {
            match decode_payload(body, "x") {
                Err(IngestError::MalformedPayload(msg)) => assert!(!msg.is_empty()),
                other => panic!("expected MalformedPayload, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_receive_stores_and_broadcasts() {
        let (service, store, hub) = service();
        let mut viewer = hub.connect();
        viewer.try_recv();

        let record = service
            .receive(br#"{"sender":"Alice","content":"hi"}"#, "192.0.2.1")
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.sender, "Alice");
        assert_eq!(record.origin_address, "192.0.2.1");
        assert_eq!(store.count(), 1);
        assert_eq!(viewer.try_recv(), Some(HubEvent::NewNotification(record)));
        assert_eq!(viewer.try_recv(), None);
    }

    #[test]
    fn test_receive_rejection_has_no_side_effects() {
        let (service, store, hub) = service();
        let mut viewer = hub.connect();
        viewer.try_recv();

        assert!(service.receive(b"[]", "192.0.2.1").is_err());
        assert_eq!(store.count(), 0);
        assert_eq!(viewer.try_recv(), None);

        // Next successful ingest still gets id 1
        assert_eq!(service.receive(b"{}", "192.0.2.1").unwrap().id, 1);
    }

    #[test]
    fn test_receive_succeeds_when_viewer_is_gone() {
        let (service, store, hub) = service();
        drop(hub.connect());

        let record = service.receive(b"{}", "192.0.2.1").unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(store.count(), 1);
        assert_eq!(hub.session_count(), 0);
    }
}
