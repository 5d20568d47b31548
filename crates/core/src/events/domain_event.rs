//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::calculator::InvestmentResult;

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions (re-rendering results,
/// refreshing listings, and so on).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A scenario edit produced a new set of investment metrics.
    InvestmentRecalculated { result: InvestmentResult },

    /// Listings were created, updated, or deleted.
    PropertiesChanged { property_ids: Vec<String> },

    /// Documents were uploaded or deleted.
    DocumentsChanged {
        document_ids: Vec<String>,
        property_ids: Vec<String>,
    },

    /// A user signed in, registered, or signed out (`user_id` is `None`).
    SessionChanged { user_id: Option<String> },
}

impl DomainEvent {
    pub fn investment_recalculated(result: InvestmentResult) -> Self {
        Self::InvestmentRecalculated { result }
    }

    pub fn properties_changed(property_ids: Vec<String>) -> Self {
        Self::PropertiesChanged { property_ids }
    }

    pub fn documents_changed(document_ids: Vec<String>, property_ids: Vec<String>) -> Self {
        Self::DocumentsChanged {
            document_ids,
            property_ids,
        }
    }

    pub fn session_changed(user_id: Option<String>) -> Self {
        Self::SessionChanged { user_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = DomainEvent::properties_changed(vec!["1".to_string()]);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "properties_changed");
        assert_eq!(json["property_ids"][0], "1");
    }

    #[test]
    fn test_session_changed_sign_out_has_no_user() {
        let event = DomainEvent::session_changed(None);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "session_changed");
        assert!(json["user_id"].is_null());
    }
}
