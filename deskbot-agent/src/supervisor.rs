use crate::prompts::SUPERVISOR_PROMPT;
use async_trait::async_trait;
use deskbot_core::{ChatModel, ChatRequest, Message, Result};
use deskbot_graph::{Next, TurnNode, TurnState, TurnUpdate};
use std::sync::Arc;

/// Routes the turn to a domain agent from the latest user message
/// alone. Anything that is not clearly accounting, including a model
/// failure, goes to support.
pub struct SupervisorAgent {
    model: Arc<dyn ChatModel>,
}

impl SupervisorAgent {
    pub const NAME: &'static str = "supervisor";

    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    async fn classify(&self, state: &TurnState) -> Result<Next> {
        let last = state.last_message().cloned().unwrap_or_else(|| Message::user(""));
        let req = ChatRequest::new(vec![Message::system(SUPERVISOR_PROMPT), last])
            .with_temperature(0.0);

        let response = self.model.complete(req).await?;
        let reply = response.content.trim().to_lowercase();
        if reply.contains("accounting") {
            Ok(Next::Accounting)
        } else {
            Ok(Next::Support)
        }
    }
}

#[async_trait]
impl TurnNode for SupervisorAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(&self, state: &TurnState) -> Result<TurnUpdate> {
        let next = match self.classify(state).await {
            Ok(next) => next,
            Err(e) => {
                tracing::error!(error = %e, "supervisor failed, defaulting to support");
                Next::Support
            }
        };
        tracing::info!(route = ?next, "supervisor routed turn");
        Ok(TurnUpdate::route(next))
    }
}
