use crate::context::windowed_context;
use crate::prompts::ACCOUNTING_PROMPT;
use async_trait::async_trait;
use deskbot_core::{execute_to_string, ChatModel, ChatRequest, Message, Result, Tool, ToolName};
use deskbot_graph::{TurnNode, TurnState, TurnUpdate};
use serde_json::json;
use std::sync::Arc;

const ACCOUNTING_ERROR_REPLY: &str = "Error processing accounting query.";

/// Trigger words that force a search when the model answers a
/// data-looking question without calling its tool.
const DATA_QUERY_KEYWORDS: [&str; 14] = [
    "salary",
    "asset",
    "transaction",
    "employee",
    "debt",
    "profit",
    "loss",
    "name",
    "department",
    "what",
    "who",
    "show",
    "find",
    "get",
];

/// Answers financial-data questions with the `search_accounting` tool.
/// Unlike the support agent it does not trust the model to always call
/// the tool; a keyword heuristic forces a search for data-seeking
/// messages the model tried to answer from memory.
pub struct AccountingAgent {
    model: Arc<dyn ChatModel>,
    tool: Arc<dyn Tool>,
}

impl AccountingAgent {
    pub const NAME: &'static str = "accounting";

    pub fn new(model: Arc<dyn ChatModel>, tool: Arc<dyn Tool>) -> Self {
        Self { model, tool }
    }

    async fn answer(&self, state: &TurnState) -> Result<Message> {
        let last_user_message =
            state.last_message().map(|m| m.content.clone()).unwrap_or_default();

        let context = windowed_context(ACCOUNTING_PROMPT, &state.messages);
        let req = ChatRequest::new(context)
            .with_tools(vec![self.tool.spec()])
            .with_temperature(0.0);
        let response = self.model.complete(req).await?;

        if response.has_tool_calls() {
            let mut tool_messages = Vec::new();
            for call in &response.tool_calls {
                if ToolName::parse(&call.name) != Some(self.tool.name()) {
                    tracing::warn!(tool = %call.name, "skipping unrecognized tool call");
                    continue;
                }
                // The model sometimes omits the argument; fall back to
                // the raw user message.
                let query = call.query().unwrap_or(&last_user_message);
                tracing::info!(tool = %call.name, query, "executing tool call");
                let result =
                    execute_to_string(self.tool.as_ref(), &json!({ "query": query })).await;
                tool_messages.push(Message::tool_result(call.id.clone(), result));
            }

            let mut followup = state.messages.clone();
            followup.push(response.into_message());
            followup.extend(tool_messages);
            let final_response = self
                .model
                .complete(
                    ChatRequest::new(followup)
                        .with_tools(vec![self.tool.spec()])
                        .with_temperature(0.0),
                )
                .await?;
            return Ok(final_response.into_message());
        }

        let lowered = last_user_message.to_lowercase();
        if DATA_QUERY_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            tracing::info!(query = %last_user_message, "forcing tool usage for data query");
            let args = json!({ "query": last_user_message });
            let result = execute_to_string(self.tool.as_ref(), &args).await;

            // Record the forced call on the draft reply so the tool
            // message stays correlated on the wire.
            let forced = deskbot_core::ToolCall::new("manual_call", self.tool.name().as_str(), args);
            let mut followup = state.messages.clone();
            followup.push(response.into_message().with_tool_calls(vec![forced]));
            followup.push(Message::tool_result("manual_call", result.clone()));
            followup.push(Message::system(format!(
                "Use the following search results to answer the user's question:\n{result}"
            )));
            let final_response = self
                .model
                .complete(
                    ChatRequest::new(followup)
                        .with_tools(vec![self.tool.spec()])
                        .with_temperature(0.0),
                )
                .await?;
            return Ok(final_response.into_message());
        }

        Ok(response.into_message())
    }
}

#[async_trait]
impl TurnNode for AccountingAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(&self, state: &TurnState) -> Result<TurnUpdate> {
        match self.answer(state).await {
            Ok(message) => Ok(TurnUpdate::reply(message)),
            Err(e) => {
                tracing::error!(error = %e, "accounting agent failed");
                Ok(TurnUpdate::reply(Message::assistant(ACCOUNTING_ERROR_REPLY)))
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
    use deskbot_tool::SearchAccountingTool;

    fn accounting_tool() -> Arc<dyn Tool> {
        let table = Table::new(
            "human_capital",
            vec!["Name".to_string(), "Department".to_string(), "Base_Salary".to_string()],
            vec![Record::new(vec![
                ("Name".to_string(), json!("Amit Kumar")),
                ("Department".to_string(), json!("Finance")),
                ("Base_Salary".to_string(), json!("50000")),
            ])],
        );
        let engine = SearchEngine::new(Arc::new(TabularStore::from_tables(vec![table])));
        Arc::new(SearchAccountingTool::new(engine))
    }

    #[tokio::test]
    async fn test_model_requested_tool_call() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_reply(ChatResponse::default().with_tool_calls(vec![ToolCall::new(
                    "call_1",
                    "search_accounting",
                    json!({"query": "amit"}),
                )]))
                .with_text("Amit Kumar's base salary is 50000."),
        );
        let agent = AccountingAgent::new(model.clone(), accounting_tool());
        let state = TurnState::new(vec![Message::user("base salary of amit kumar")]);

        let update = agent.run(&state).await.unwrap();
        assert!(update.messages[0].content.contains("50000"));

        let second = &model.requests()[1];
        let tool_msg = second.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.contains("Amit Kumar"));
    }

    #[tokio::test]
    async fn test_missing_query_argument_falls_back_to_user_message() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_reply(ChatResponse::default().with_tool_calls(vec![ToolCall::new(
                    "call_1",
                    "search_accounting",
                    json!({}),
                )]))
                .with_text("done"),
        );
        let agent = AccountingAgent::new(model.clone(), accounting_tool());
        let state = TurnState::new(vec![Message::user("amit")]);
        agent.run(&state).await.unwrap();

        let second = &model.requests()[1];
        let tool_msg = second.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.contains("Amit Kumar"));
    }

    #[tokio::test]
    async fn test_forced_tool_usage_on_data_keywords() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_text("Amit earns a competitive salary.")
                .with_text("According to the records, the base salary is 50000."),
        );
        let agent = AccountingAgent::new(model.clone(), accounting_tool());
        let state = TurnState::new(vec![Message::user("what is the salary of amit")]);

        let update = agent.run(&state).await.unwrap();
        assert!(update.messages[0].content.contains("50000"));

        let second = &model.requests()[1];
        let framing = second.messages.last().unwrap();
        assert_eq!(framing.role, Role::System);
        assert!(framing.content.starts_with("Use the following search results"));
        assert!(framing.content.contains("Amit Kumar"));

        let tool_msg = second.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert_eq!(tool_msg.tool_call_id.as_deref(), Some("manual_call"));
    }

    #[tokio::test]
    async fn test_no_keywords_returns_reply_verbatim() {
        let model = Arc::new(MockChatModel::new("mock").with_text("Hello there!"));
        let agent = AccountingAgent::new(model.clone(), accounting_tool());
        let state = TurnState::new(vec![Message::user("hello")]);

        let update = agent.run(&state).await.unwrap();
        assert_eq!(update.messages[0].content, "Hello there!");
        assert_eq!(update.next, Some(Next::End));
        assert_eq!(model.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_model_failure_becomes_apology() {
        let model = Arc::new(MockChatModel::new("mock").with_failure("offline"));
        let agent = AccountingAgent::new(model, accounting_tool());
        let update = agent.run(&TurnState::default()).await.unwrap();
        assert_eq!(update.messages[0].content, ACCOUNTING_ERROR_REPLY);
    }
}
