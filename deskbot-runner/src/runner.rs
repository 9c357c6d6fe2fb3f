use deskbot_agent::{AccountingAgent, SupervisorAgent, SupportAgent};
use deskbot_core::{BotError, ChatModel, Message, Result};
use deskbot_graph::{Next, TurnGraph, TurnState, END};
use deskbot_search::SearchEngine;
use deskbot_session::{InMemorySessionStore, SessionStore};
use deskbot_store::TabularStore;
use deskbot_tool::{SearchAccountingTool, SearchSupportTool};
use std::sync::Arc;
use std::time::Duration;

/// One assembled chatbot: supervisor, two domain agents, search tools
/// and a session store, run as a three-node graph per turn.
pub struct Chatbot {
    graph: TurnGraph,
    sessions: Arc<dyn SessionStore>,
}

impl Chatbot {
    pub fn builder() -> ChatbotBuilder {
        ChatbotBuilder::default()
    }

    /// Run one full turn: load history, route, answer, persist.
    ///
    /// Internal agent failures never surface here; the reply is always
    /// a usable string. Errors from this method are infrastructure
    /// problems (session store, graph wiring), not turn content.
    pub async fn respond(&self, session_id: &str, user_message: &str) -> Result<String> {
        self.sessions.create_session(session_id, Some(user_message)).await?;

        let mut history = self.sessions.get_history(session_id).await?;
        history.push(Message::user(user_message));

        let state = self
            .graph
            .run(TurnState::new(history))
            .await
            .map_err(|e| BotError::Agent(e.to_string()))?;

        let reply = state
            .last_message()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.sessions.save_history(session_id, state.messages).await?;

        tracing::info!(session = session_id, reply_len = reply.len(), "turn complete");
        Ok(reply)
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }
}

#[derive(Default)]
pub struct ChatbotBuilder {
    model: Option<Arc<dyn ChatModel>>,
    store: Option<Arc<TabularStore>>,
    sessions: Option<Arc<dyn SessionStore>>,
    call_timeout: Option<Duration>,
    step_limit: Option<usize>,
}

impl ChatbotBuilder {
    pub fn model(mut self, model: Arc<dyn ChatModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn store(mut self, store: Arc<TabularStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Defaults to an in-memory store when not set.
    pub fn session_store(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Bound each graph step (one agent, including its model calls and
    /// tool executions). Unset means a hung model call stalls the turn.
    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    pub fn step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Chatbot> {
        let model = self.model.ok_or_else(|| BotError::Config("model is required".to_string()))?;
        let store = self.store.ok_or_else(|| BotError::Config("store is required".to_string()))?;
        let sessions =
            self.sessions.unwrap_or_else(|| Arc::new(InMemorySessionStore::new()));

        let engine = SearchEngine::new(store);
        let accounting_tool = Arc::new(SearchAccountingTool::new(engine.clone()));
        let support_tool = Arc::new(SearchSupportTool::new(engine));

        let supervisor = Arc::new(SupervisorAgent::new(model.clone()));
        let accounting = Arc::new(AccountingAgent::new(model.clone(), accounting_tool));
        let support = Arc::new(SupportAgent::new(model, support_tool));

        let mut builder = TurnGraph::builder()
            .node(supervisor)
            .node(accounting)
            .node(support)
            .entry(SupervisorAgent::NAME)
            .conditional_edge(SupervisorAgent::NAME, |state: &TurnState| {
                match state.next {
                    Some(Next::Accounting) => AccountingAgent::NAME.to_string(),
                    _ => SupportAgent::NAME.to_string(),
                }
            })
            .edge(AccountingAgent::NAME, END)
            .edge(SupportAgent::NAME, END);
        if let Some(limit) = self.step_limit {
            builder = builder.step_limit(limit);
        }
        if let Some(timeout) = self.call_timeout {
            builder = builder.step_timeout(timeout);
        }

        let graph = builder.build().map_err(|e| BotError::Config(e.to_string()))?;
        Ok(Chatbot { graph, sessions })
    }
}
