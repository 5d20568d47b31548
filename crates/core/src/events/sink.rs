//! Where services publish [`DomainEvent`]s.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receiver for events raised by core services.
///
/// Services call `emit` once a mutation has succeeded, before returning to
/// the caller. Implementations must not block and cannot fail the mutation.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Drops every event.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Records events in memory so tests can assert on them.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sink_keeps_emission_order() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::session_changed(Some("u1".to_string())));
        sink.emit(DomainEvent::properties_changed(vec!["1".to_string()]));
        sink.emit(DomainEvent::session_changed(None));

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.events()[0], DomainEvent::session_changed(Some("u1".to_string())));
        assert_eq!(sink.events()[2], DomainEvent::session_changed(None));
    }

    #[test]
    fn test_clones_share_one_log() {
        let sink = MockDomainEventSink::new();
        let shared: Arc<dyn DomainEventSink> = Arc::new(sink.clone());

        shared.emit(DomainEvent::documents_changed(
            vec!["d1".to_string()],
            vec!["1".to_string()],
        ));
        NoOpDomainEventSink.emit(DomainEvent::session_changed(None));

        assert_eq!(sink.len(), 1);
    }
}
