//! Session store abstraction
//!
//! Conversation history is keyed by (application, user, session) and stored
//! behind a trait so handlers can be wired to memory-backed or durable
//! storage. The exchange endpoints never touch a session store; it exists for
//! handlers that keep multi-turn context.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::protocol::Message;

/// Identifies one conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    /// Application name
    pub app: String,

    /// User identifier
    pub user: String,

    /// Session identifier within the user's scope
    pub session: String,
}

impl SessionKey {
    /// Create a new session key
    pub fn new(
        app: impl Into<String>,
        user: impl Into<String>,
        session: impl Into<String>,
    ) -> Self {
        Self {
            app: app.into(),
            user: user.into(),
            session: session.into(),
        }
    }
}

/// Storage for per-session conversation history
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Append a message to the session, creating the session if absent
    async fn append(&self, key: &SessionKey, message: Message);

    /// Full message history for the session, oldest first
    ///
    /// Returns an empty history for unknown sessions.
    async fn history(&self, key: &SessionKey) -> Vec<Message>;

    /// Whether the session exists
    async fn contains(&self, key: &SessionKey) -> bool;
}

/// Simple, non-persistent in-memory session store
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionKey, Vec<Message>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind an [`Arc`], ready to share with handlers
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn append(&self, key: &SessionKey, message: Message) {
        let mut sessions = self.sessions.write().await;
        sessions.entry(key.clone()).or_default().push(message);
    }

    async fn history(&self, key: &SessionKey) -> Vec<Message> {
        let sessions = self.sessions.read().await;
        sessions.get(key).cloned().unwrap_or_default()
    }

    async fn contains(&self, key: &SessionKey) -> bool {
        let sessions = self.sessions.read().await;
        sessions.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SessionKey {
        SessionKey::new("weather_app", "user_1", "session_001")
    }

    #[tokio::test]
    async fn test_append_creates_session() {
        let store = InMemorySessionStore::new();
        assert!(!store.contains(&key()).await);

        store.append(&key(), Message::user("hello")).await;
        assert!(store.contains(&key()).await);
    }

    #[tokio::test]
    async fn test_history_preserves_order() {
        let store = InMemorySessionStore::new();
        store.append(&key(), Message::user("first")).await;
        store.append(&key(), Message::agent("second")).await;

        let history = store.history(&key()).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].first_text(), Some("first"));
        assert_eq!(history[1].first_text(), Some("second"));
    }

    #[tokio::test]
    async fn test_unknown_session_has_empty_history() {
        let store = InMemorySessionStore::new();
        assert!(store.history(&key()).await.is_empty());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_per_key() {
        let store = InMemorySessionStore::new();
        let other = SessionKey::new("weather_app", "user_2", "session_001");

        store.append(&key(), Message::user("mine")).await;
        assert!(store.history(&other).await.is_empty());
    }
}
