use crate::session::SessionRecord;
use crate::store::SessionStore;
use async_trait::async_trait;
use deskbot_core::{Message, Result};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Session store backed by a process-local map. History disappears with
/// the process; intended for tests and single-instance deployments.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self, session_id: &str, initial_message: Option<&str>) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionRecord::new(session_id, initial_message));
        Ok(())
    }

    async fn get_history(&self, session_id: &str) -> Result<Vec<Message>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).map(|s| s.messages.clone()).unwrap_or_default())
    }

    async fn save_history(&self, session_id: &str, history: Vec<Message>) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let record = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionRecord::new(session_id, None));
        record.messages = history;
        record.touch();
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<SessionRecord>> {
        let sessions = self.sessions.read().await;
        let mut records: Vec<SessionRecord> = sessions.values().cloned().collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool> {
        Ok(self.sessions.write().await.remove(session_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.create_session("s1", Some("first question")).await.unwrap();
        store.create_session("s1", Some("something else")).await.unwrap();

        let sessions = store.list_sessions().await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].title, "first question");
    }

    #[tokio::test]
    async fn test_history_round_trip() {
        let store = InMemorySessionStore::new();
        assert!(store.get_history("s1").await.unwrap().is_empty());

        let history = vec![Message::user("hi"), Message::assistant("hello")];
        store.save_history("s1", history.clone()).await.unwrap();
        assert_eq!(store.get_history("s1").await.unwrap(), history);
    }

    #[tokio::test]
    async fn test_save_creates_missing_session() {
        let store = InMemorySessionStore::new();
        store.save_history("fresh", vec![Message::user("hi")]).await.unwrap();
        assert_eq!(store.list_sessions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemorySessionStore::new();
        store.create_session("s1", None).await.unwrap();
        assert!(store.delete_session("s1").await.unwrap());
        assert!(!store.delete_session("s1").await.unwrap());
    }
}
