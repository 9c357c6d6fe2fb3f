//! Scripted model for tests.

use async_trait::async_trait;
use deskbot_core::{BotError, ChatModel, ChatRequest, ChatResponse, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

enum Scripted {
    Reply(ChatResponse),
    Failure(String),
}

/// Replays a fixed sequence of responses and records every request it
/// receives, so tests can assert on the context an agent built.
pub struct MockChatModel {
    name: String,
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockChatModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(self, response: ChatResponse) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Reply(response));
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_reply(ChatResponse::text(content))
    }

    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Failure(message.into()));
        self
    }

    /// Every request seen so far, in call order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, req: ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(req);
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(BotError::Model(message)),
            None => Err(BotError::Model("mock script exhausted".to_string())),
        }
    }
}
