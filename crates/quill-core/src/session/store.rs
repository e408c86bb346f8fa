//! In-memory session store.

use super::model::{FormSession, OwnerId};
use crate::error::{QuillError, Result};
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Lock-protected map of live form sessions, keyed by owner identity.
///
/// The presentation layer serializes requests per owner, so the store only
/// has to guard against concurrent access from different owners. All
/// operations take the lock briefly; nothing blocks while holding it.
///
/// Removal is idempotent: deleting a session that is already gone is a
/// no-op, which lets the stale-session sweep run concurrently with the form
/// controller's own mutations.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<OwnerId, FormSession>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session, replacing any prior session for the same owner.
    pub async fn open(&self, session: FormSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.owner_id, session);
    }

    /// Returns a snapshot of the owner's session, if one is open.
    pub async fn get(&self, owner_id: OwnerId) -> Option<FormSession> {
        let sessions = self.sessions.read().await;
        sessions.get(&owner_id).cloned()
    }

    /// Mutates the owner's session in place and refreshes its activity
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::SessionNotFound`] if the owner has no open
    /// session.
    pub async fn update<F, R>(&self, owner_id: OwnerId, mutate: F) -> Result<R>
    where
        F: FnOnce(&mut FormSession) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&owner_id)
            .ok_or(QuillError::SessionNotFound { owner: owner_id })?;
        let result = mutate(session);
        session.touch();
        Ok(result)
    }

    /// Removes the owner's session. Returns the removed session, or `None`
    /// if nothing was open.
    pub async fn remove(&self, owner_id: OwnerId) -> Option<FormSession> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&owner_id)
    }

    /// Deletes sessions inactive for longer than `ttl`. Returns the number
    /// removed.
    pub async fn sweep_stale(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_stale(ttl));
        before - sessions.len()
    }

    /// Number of currently open sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no sessions are open.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FieldValue;

    #[tokio::test]
    async fn test_open_replaces_prior_session_for_owner() {
        let store = SessionStore::new();
        store.open(FormSession::for_document_type(1, "rules")).await;
        store
            .open(FormSession::for_document_type(1, "privacy_policy"))
            .await;

        let session = store.get(1).await.unwrap();
        assert_eq!(session.document_type.as_deref(), Some("privacy_policy"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_missing_session_is_not_found() {
        let store = SessionStore::new();
        let err = store.update(42, |_| ()).await.unwrap_err();
        assert!(err.is_session_not_found());
    }

    #[tokio::test]
    async fn test_update_merges_values_and_touches() {
        let store = SessionStore::new();
        store.open(FormSession::for_document_type(1, "rules")).await;
        let before = store.get(1).await.unwrap().updated_at;

        store
            .update(1, |session| {
                session.values.insert(
                    "server_name".to_string(),
                    FieldValue::Text("Foo".to_string()),
                );
            })
            .await
            .unwrap();

        let session = store.get(1).await.unwrap();
        assert_eq!(session.values.len(), 1);
        assert!(session.updated_at >= before);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = SessionStore::new();
        store.open(FormSession::awaiting_selection(7)).await;
        assert!(store.remove(7).await.is_some());
        assert!(store.remove(7).await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_per_owner() {
        let store = SessionStore::new();
        store.open(FormSession::for_document_type(1, "rules")).await;
        store
            .open(FormSession::for_document_type(2, "privacy_policy"))
            .await;

        store
            .update(1, |session| {
                session
                    .values
                    .insert("server_name".to_string(), FieldValue::Text("A".to_string()));
            })
            .await
            .unwrap();

        let other = store.get(2).await.unwrap();
        assert!(other.values.is_empty());
        assert_eq!(other.document_type.as_deref(), Some("privacy_policy"));
    }

    #[tokio::test]
    async fn test_sweep_removes_only_stale_sessions() {
        let store = SessionStore::new();
        store.open(FormSession::for_document_type(1, "rules")).await;
        store.open(FormSession::for_document_type(2, "rules")).await;

        // A generous TTL keeps both; a negative TTL makes everything stale.
        assert_eq!(store.sweep_stale(Duration::seconds(300)).await, 0);
        assert_eq!(store.sweep_stale(Duration::seconds(-1)).await, 2);
        assert!(store.is_empty().await);
    }
}
