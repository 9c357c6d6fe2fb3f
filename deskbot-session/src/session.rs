use chrono::{DateTime, Utc};
use deskbot_core::Message;
use serde::{Deserialize, Serialize};

const TITLE_LIMIT: usize = 50;

/// One session's persisted record: metadata plus full message history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl SessionRecord {
    pub fn new(id: impl Into<String>, initial_message: Option<&str>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: derive_title(initial_message),
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Session title from its first message, truncated for list views.
fn derive_title(initial_message: Option<&str>) -> String {
    match initial_message {
        Some(msg) if msg.chars().count() > TITLE_LIMIT => {
            let cut: String = msg.chars().take(TITLE_LIMIT).collect();
            format!("{cut}...")
        }
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => "New Chat".to_string(),
    }
}
