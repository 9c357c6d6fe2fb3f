//! OpenAI-compatible chat completions client.

use crate::config::OpenAiConfig;
use crate::wire::{self, ChatCompletionResponse};
use async_trait::async_trait;
use deskbot_core::{BotError, ChatModel, ChatRequest, ChatResponse, Result};
use reqwest::Client;

pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BotError::Model(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Build the client entirely from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiConfig::from_env()?)
    }

    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url().trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, req: ChatRequest) -> Result<ChatResponse> {
        let body = wire::build_request(&self.config.model, &req, self.config.max_tokens);
        tracing::debug!(model = %self.config.model, messages = req.messages.len(), "completion request");

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Model(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_else(|_| "<no body>".to_string());
            return Err(BotError::Model(format!("API error {status}: {text}")));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BotError::Model(format!("Failed to parse response: {e}")))?;
        wire::response_from_wire(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let client = OpenAiClient::new(
            OpenAiConfig::new("sk-test", "gpt-4o-mini").with_base_url("http://localhost:9999/v1/"),
        )
        .unwrap();
        assert_eq!(client.api_url(), "http://localhost:9999/v1/chat/completions");
    }

    #[test]
    fn test_name_reports_model() {
        let client = OpenAiClient::new(OpenAiConfig::new("sk-test", "gpt-4o-mini")).unwrap();
        assert_eq!(client.name(), "gpt-4o-mini");
    }
}
