use crate::session::SessionRecord;
use async_trait::async_trait;
use deskbot_core::{Message, Result};

/// Persistence for per-session conversation history.
///
/// The turn pipeline only reads history and saves the full updated
/// history back; it never mutates a session in place.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session if it does not exist yet. Creating an existing
    /// session is a no-op.
    async fn create_session(&self, session_id: &str, initial_message: Option<&str>) -> Result<()>;

    /// Full ordered history; an unknown session yields an empty history.
    async fn get_history(&self, session_id: &str) -> Result<Vec<Message>>;

    /// Replace the session's history with `history`, creating the
    /// session if needed.
    async fn save_history(&self, session_id: &str, history: Vec<Message>) -> Result<()>;

    /// All sessions, most recently updated first.
    async fn list_sessions(&self) -> Result<Vec<SessionRecord>>;

    /// Returns true if the session existed.
    async fn delete_session(&self, session_id: &str) -> Result<bool>;
}
