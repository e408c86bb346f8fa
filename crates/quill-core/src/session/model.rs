//! Form session domain model.

use crate::render::FieldValue;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Identity of the requester, assigned by the presentation layer.
pub type OwnerId = u64;

/// Lifecycle phase of an open form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Waiting for the user to pick a document type.
    AwaitingSelection,
    /// Collecting field values for the chosen document type.
    AwaitingFields,
}

/// One user's in-progress document form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    /// Owner identity; at most one live session per owner.
    pub owner_id: OwnerId,
    /// Chosen document type, `None` while still selecting.
    pub document_type: Option<String>,
    /// Field values collected so far, keyed by field name.
    pub values: HashMap<String, FieldValue>,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
    /// Last mutation time, drives the inactivity sweep.
    pub updated_at: DateTime<Utc>,
}

impl FormSession {
    /// Opens a session with no document type chosen yet.
    pub fn awaiting_selection(owner_id: OwnerId) -> Self {
        let now = Utc::now();
        Self {
            owner_id,
            document_type: None,
            values: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Opens a session directly for a known document type.
    pub fn for_document_type(owner_id: OwnerId, document_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            owner_id,
            document_type: Some(document_type.into()),
            values: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Current lifecycle phase, derived from the chosen document type.
    pub fn phase(&self) -> FormPhase {
        if self.document_type.is_some() {
            FormPhase::AwaitingFields
        } else {
            FormPhase::AwaitingSelection
        }
    }

    /// Refreshes the inactivity timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether the session has been inactive longer than `ttl`.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        Utc::now().signed_duration_since(self.updated_at) > ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_follows_document_type() {
        let selecting = FormSession::awaiting_selection(1);
        assert_eq!(selecting.phase(), FormPhase::AwaitingSelection);

        let filling = FormSession::for_document_type(1, "rules");
        assert_eq!(filling.phase(), FormPhase::AwaitingFields);
        assert!(filling.values.is_empty());
    }

    #[test]
    fn test_fresh_session_is_not_stale() {
        let session = FormSession::for_document_type(1, "rules");
        assert!(!session.is_stale(Duration::seconds(300)));
        assert!(session.is_stale(Duration::seconds(-1)));
    }
}
