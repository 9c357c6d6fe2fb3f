//! Configuration for the OpenAI-compatible provider.

use deskbot_core::{BotError, Result};
use serde::{Deserialize, Serialize};

/// Default API base URL.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key, sent as a bearer token.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Optional custom base URL (any OpenAI-compatible endpoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Maximum tokens for output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: model.into(), base_url: None, max_tokens: None }
    }

    /// Read configuration from `OPENAI_API_KEY`, `CHAT_MODEL` and
    /// `OPENAI_BASE_URL`. Only the key is required.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| BotError::Config("OPENAI_API_KEY is not set".to_string()))?;
        let model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("OPENAI_BASE_URL").ok();
        Ok(Self { api_key, model, base_url, max_tokens: None })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_API_BASE)
    }
}
