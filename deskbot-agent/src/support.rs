use crate::context::windowed_context;
use crate::prompts::SUPPORT_PROMPT;
use async_trait::async_trait;
use deskbot_core::{execute_to_string, ChatModel, ChatRequest, Message, Result, Tool, ToolName};
use deskbot_graph::{TurnNode, TurnState, TurnUpdate};
use std::sync::Arc;

const SUPPORT_ERROR_REPLY: &str = "Error processing support query.";

/// Answers smart metering support questions, consulting the
/// `search_support` tool when the model asks for it.
pub struct SupportAgent {
    model: Arc<dyn ChatModel>,
    tool: Arc<dyn Tool>,
}

impl SupportAgent {
    pub const NAME: &'static str = "support";

    pub fn new(model: Arc<dyn ChatModel>, tool: Arc<dyn Tool>) -> Self {
        Self { model, tool }
    }

    async fn answer(&self, state: &TurnState) -> Result<Message> {
        let context = windowed_context(SUPPORT_PROMPT, &state.messages);
        let req = ChatRequest::new(context)
            .with_tools(vec![self.tool.spec()])
            .with_temperature(0.0);
        let response = self.model.complete(req).await?;

        if !response.has_tool_calls() {
            return Ok(response.into_message());
        }

        let mut tool_messages = Vec::new();
        for call in &response.tool_calls {
            // Only the bound tool is dispatched; anything else the
            // model invents is skipped.
            if ToolName::parse(&call.name) != Some(self.tool.name()) {
                tracing::warn!(tool = %call.name, "skipping unrecognized tool call");
                continue;
            }
            tracing::info!(tool = %call.name, query = ?call.query(), "executing tool call");
            let result = execute_to_string(self.tool.as_ref(), &call.args).await;
            tool_messages.push(Message::tool_result(call.id.clone(), result));
        }

        let mut followup = state.messages.clone();
        followup.push(response.into_message());
        followup.extend(tool_messages);
        let final_response = self
            .model
            .complete(ChatRequest::new(followup).with_tools(vec![self.tool.spec()]).with_temperature(0.0))
            .await?;
        Ok(final_response.into_message())
    }
}

#[async_trait]
impl TurnNode for SupportAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(&self, state: &TurnState) -> Result<TurnUpdate> {
        match self.answer(state).await {
            Ok(message) => Ok(TurnUpdate::reply(message)),
            Err(e) => {
                tracing::error!(error = %e, "support agent failed");
                Ok(TurnUpdate::reply(Message::assistant(SUPPORT_ERROR_REPLY)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskbot_core::{ChatResponse, Role, ToolCall};
    use deskbot_graph::Next;
    use deskbot_model::MockChatModel;
    use deskbot_search::SearchEngine;
    use deskbot_store::{Record, TabularStore, Table};
    use deskbot_tool::SearchSupportTool;
    use serde_json::json;

    fn support_tool() -> Arc<dyn Tool> {
        let table = Table::new(
            "support_knowledge",
            vec![
                "Customer_Query".to_string(),
                "Evidence_Based_Answer".to_string(),
                "Category".to_string(),
            ],
            vec![Record::new(vec![
                ("Customer_Query".to_string(), json!("My meter display is blank")),
                ("Evidence_Based_Answer".to_string(), json!("Check the power supply to the IHD")),
                ("Category".to_string(), json!("Connectivity & Technical")),
            ])],
        );
        let engine = SearchEngine::new(Arc::new(TabularStore::from_tables(vec![table])));
        Arc::new(SearchSupportTool::new(engine))
    }

    #[tokio::test]
    async fn test_tool_round_trip() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_reply(ChatResponse::default().with_tool_calls(vec![ToolCall::new(
                    "call_1",
                    "search_support",
                    json!({"query": "meter display blank"}),
                )]))
                .with_text("Please check the power supply to your in-home display."),
        );
        let agent = SupportAgent::new(model.clone(), support_tool());
        let state = TurnState::new(vec![Message::user("my meter display is blank")]);

        let update = agent.run(&state).await.unwrap();
        assert_eq!(update.next, Some(Next::End));
        assert_eq!(update.messages.len(), 1);
        assert!(update.messages[0].content.contains("power supply"));

        // Second request carries the draft reply and the tool result.
        let second = &model.requests()[1];
        let tool_msg = second.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert_eq!(tool_msg.tool_call_id.as_deref(), Some("call_1"));
        assert!(tool_msg.content.contains("Check the power supply"));
    }

    #[tokio::test]
    async fn test_no_tool_call_reply_is_final() {
        let model = Arc::new(MockChatModel::new("mock").with_text("Happy to help!"));
        let agent = SupportAgent::new(model.clone(), support_tool());
        let state = TurnState::new(vec![Message::user("hello")]);

        let update = agent.run(&state).await.unwrap();
        assert_eq!(update.messages[0].content, "Happy to help!");
        assert_eq!(model.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool_name_skipped() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_reply(ChatResponse::default().with_tool_calls(vec![
                    ToolCall::new("call_1", "delete_everything", json!({})),
                    ToolCall::new("call_2", "search_support", json!({"query": "blank display"})),
                ]))
                .with_text("final answer"),
        );
        let agent = SupportAgent::new(model.clone(), support_tool());
        let state = TurnState::new(vec![Message::user("blank display")]);
        agent.run(&state).await.unwrap();

        let second = &model.requests()[1];
        let tool_msgs: Vec<_> =
            second.messages.iter().filter(|m| m.role == Role::Tool).collect();
        assert_eq!(tool_msgs.len(), 1);
        assert_eq!(tool_msgs[0].tool_call_id.as_deref(), Some("call_2"));
    }

    #[tokio::test]
    async fn test_model_failure_becomes_apology() {
        let model = Arc::new(MockChatModel::new("mock").with_failure("offline"));
        let agent = SupportAgent::new(model, support_tool());
        let update = agent.run(&TurnState::default()).await.unwrap();
        assert_eq!(update.messages[0].content, SUPPORT_ERROR_REPLY);
        assert_eq!(update.next, Some(Next::End));
    }
}
