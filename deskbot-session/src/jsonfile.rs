use crate::session::SessionRecord;
use crate::store::SessionStore;
use async_trait::async_trait;
use deskbot_core::{Message, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Session store backed by a single JSON metadata file, rewritten after
/// every mutation. Good enough for a single process; concurrent
/// processes sharing the file will lose writes.
pub struct JsonFileSessionStore {
    path: PathBuf,
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl JsonFileSessionStore {
    /// Open (or create) the store at `path`. A missing or unreadable
    /// file starts empty rather than failing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let sessions = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %path.display(), "session file corrupt, starting empty");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Ok(Self { path, sessions: Mutex::new(sessions) })
    }

    async fn persist(&self, sessions: &HashMap<String, SessionRecord>) -> Result<()> {
        let raw = serde_json::to_string_pretty(sessions)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn create_session(&self, session_id: &str, initial_message: Option<&str>) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        if !sessions.contains_key(session_id) {
            sessions
                .insert(session_id.to_string(), SessionRecord::new(session_id, initial_message));
            self.persist(&sessions).await?;
        }
        Ok(())
    }

    async fn get_history(&self, session_id: &str) -> Result<Vec<Message>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(session_id).map(|s| s.messages.clone()).unwrap_or_default())
    }

    async fn save_history(&self, session_id: &str, history: Vec<Message>) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        let record = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionRecord::new(session_id, None));
        record.messages = history;
        record.touch();
        self.persist(&sessions).await
    }

    async fn list_sessions(&self) -> Result<Vec<SessionRecord>> {
        let sessions = self.sessions.lock().await;
        let mut records: Vec<SessionRecord> = sessions.values().cloned().collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool> {
        let mut sessions = self.sessions.lock().await;
        let existed = sessions.remove(session_id).is_some();
        if existed {
            self.persist(&sessions).await?;
        }
        Ok(existed)
    }
}
