use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use chrono::{DateTime, Utc};

// ============================================================================
// Event - Immutable Record of Something That Happened
// ============================================================================
//
// An event carries the name it is dispatched under, the moment it was
// created and a plain-data payload snapshot. Handlers only ever see a
// shared reference, so an event cannot change once built.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    event_id: Uuid,
    name: String,
    occurred_at: DateTime<Utc>,
    payload: Value,
}

impl Event {
    /// Build an event from a raw name and payload
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            name: name.into(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// Build an event from a typed payload, keyed by the payload's event name
    pub fn from_payload<E: DomainEvent>(payload: &E) -> Result<Self, EventError> {
        let value = serde_json::to_value(payload).map_err(|source| EventError::Encode {
            event_name: E::event_name(),
            source,
        })?;

        Ok(Self::new(E::event_name(), value))
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// True when this event was built for the payload type `E`
    pub fn is<E: DomainEvent>(&self) -> bool {
        self.name == E::event_name()
    }

    /// Decode the payload into its typed snapshot
    pub fn payload_as<E: DeserializeOwned>(&self) -> Result<E, EventError> {
        E::deserialize(&self.payload).map_err(|source| EventError::Decode {
            event_name: self.name.clone(),
            expected: std::any::type_name::<E>(),
            source,
        })
    }
}

// ============================================================================
// Domain Event Trait
// ============================================================================

/// Typed payload of a domain event.
///
/// Each payload type owns a fixed event name; that name is the key handlers
/// are registered under.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn event_name() -> &'static str where Self: Sized;

    fn to_event(&self) -> Result<Event, EventError> where Self: Sized {
        Event::from_payload(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Failed to encode payload for {event_name}: {source}")]
    Encode {
        event_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Payload of {event_name} does not match {expected}: {source}")]
    Decode {
        event_name: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct TestEvent {
        data: String,
    }

    impl DomainEvent for TestEvent {
        fn event_name() -> &'static str { "TestEvent" }
    }

    #[test]
    fn test_event_creation() {
        let before = Utc::now();
        let event = Event::new("SomethingHappened", json!({ "id": "1" }));

        assert_eq!(event.name(), "SomethingHappened");
        assert_eq!(event.payload(), &json!({ "id": "1" }));
        assert!(event.occurred_at() >= before);
    }

    #[test]
    fn test_events_get_distinct_ids() {
        let a = Event::new("A", Value::Null);
        let b = Event::new("A", Value::Null);
        assert_ne!(a.event_id(), b.event_id());
    }

    #[test]
    fn test_typed_payload_uses_fixed_name() {
        let event = TestEvent { data: "test".to_string() }.to_event().unwrap();

        assert_eq!(event.name(), "TestEvent");
        assert!(event.is::<TestEvent>());
        assert_eq!(event.payload(), &json!({ "data": "test" }));
    }

    #[test]
    fn test_payload_as_decodes_snapshot() {
        let original = TestEvent { data: "payload".to_string() };
        let event = original.to_event().unwrap();

        let decoded: TestEvent = event.payload_as().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_payload_as_rejects_wrong_shape() {
        let event = Event::new("TestEvent", json!({ "unexpected": 1 }));

        let result = event.payload_as::<TestEvent>();
        assert!(matches!(result, Err(EventError::Decode { .. })));
    }
}
