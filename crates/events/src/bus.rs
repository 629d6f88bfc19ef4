//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for
//! [`PlatformEvent`]s. It is designed to be shared via `Arc<EventBus>`
//! across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use lingap_core::types::DbId;

// ---------------------------------------------------------------------------
// PlatformEvent
// ---------------------------------------------------------------------------

/// Audit outcome attached to workflow events that belong in the trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditOutcome {
    /// `"SUCCESS"` or `"ERROR"`.
    pub status: String,
    /// Human-readable description of what happened.
    pub message: String,
}

/// A domain event that occurred on the platform.
///
/// Constructed via [`PlatformEvent::new`] and enriched with the
/// builder methods. Events carrying an [`AuditOutcome`] are persisted
/// to the audit trail by [`AuditTrail`](crate::audit_trail::AuditTrail).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEvent {
    /// Dot-separated event name, e.g. `"rfid.bound"`.
    pub event_type: String,

    /// Barangay the event is scoped to (the audit grouping dimension).
    pub barangay: Option<String>,

    /// Optional source entity kind (e.g. `"senior"`, `"binding"`).
    pub source_entity_type: Option<String>,

    /// Optional source entity database id.
    pub source_entity_id: Option<DbId>,

    /// Optional id of the staff user that triggered the event.
    pub actor_user_id: Option<DbId>,

    /// Audit outcome, when the event should land in the audit trail.
    pub outcome: Option<AuditOutcome>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl PlatformEvent {
    /// Create a new event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            barangay: None,
            source_entity_type: None,
            source_entity_id: None,
            actor_user_id: None,
            outcome: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Scope the event to a barangay.
    pub fn with_barangay(mut self, barangay: impl Into<String>) -> Self {
        self.barangay = Some(barangay.into());
        self
    }

    /// Attach a source entity to the event.
    pub fn with_source(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id);
        self
    }

    /// Attach the acting staff user to the event.
    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_user_id = Some(user_id);
        self
    }

    /// Attach an audit outcome, marking the event for the audit trail.
    pub fn with_outcome(mut self, status: impl Into<String>, message: impl Into<String>) -> Self {
        self.outcome = Some(AuditOutcome {
            status: status.into(),
            message: message.into(),
        });
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`PlatformEvent`].
pub struct EventBus {
    sender: broadcast::Sender<PlatformEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are
    /// dropped and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently
    /// dropped.
    pub fn publish(&self, event: PlatformEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<PlatformEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let event = PlatformEvent::new("rfid.bound")
            .with_barangay("Rizal")
            .with_source("senior", 42)
            .with_actor(7)
            .with_outcome("SUCCESS", "Bound card 04AABBCC")
            .with_payload(serde_json::json!({"rfid_code": "04AABBCC"}));

        bus.publish(event);

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.event_type, "rfid.bound");
        assert_eq!(received.barangay.as_deref(), Some("Rizal"));
        assert_eq!(received.source_entity_id, Some(42));
        assert_eq!(received.actor_user_id, Some(7));
        assert_eq!(received.outcome.as_ref().unwrap().status, "SUCCESS");
        assert_eq!(received.payload["rfid_code"], "04AABBCC");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(PlatformEvent::new("senior.registered"));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");

        assert_eq!(e1.event_type, "senior.registered");
        assert_eq!(e2.event_type, "senior.registered");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(PlatformEvent::new("orphan.event"));
    }

    #[test]
    fn default_event_has_empty_optional_fields() {
        let event = PlatformEvent::new("bare.event");
        assert!(event.barangay.is_none());
        assert!(event.source_entity_type.is_none());
        assert!(event.actor_user_id.is_none());
        assert!(event.outcome.is_none());
        assert!(event.payload.is_object());
    }
}
