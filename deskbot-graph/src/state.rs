use deskbot_core::Message;
use serde::{Deserialize, Serialize};

/// Where the turn goes after the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Next {
    Accounting,
    Support,
    End,
}

/// Shared state threaded through one turn: the conversation so far plus
/// the routing decision.
#[derive(Debug, Clone, Default)]
pub struct TurnState {
    pub messages: Vec<Message>,
    pub next: Option<Next>,
}

impl TurnState {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages, next: None }
    }

    /// Merge a node's partial update: messages append, `next`
    /// overwrites only when the node set it.
    pub fn apply(&mut self, update: TurnUpdate) {
        self.messages.extend(update.messages);
        if update.next.is_some() {
            self.next = update.next;
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Partial state emitted by one node.
#[derive(Debug, Clone, Default)]
pub struct TurnUpdate {
    pub messages: Vec<Message>,
    pub next: Option<Next>,
}

impl TurnUpdate {
    pub fn route(next: Next) -> Self {
        Self { messages: Vec::new(), next: Some(next) }
    }

    pub fn reply(message: Message) -> Self {
        Self { messages: vec![message], next: Some(Next::End) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_appends_messages() {
        let mut state = TurnState::new(vec![Message::user("hi")]);
        state.apply(TurnUpdate::reply(Message::assistant("hello")));

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.next, Some(Next::End));
    }

    #[test]
    fn test_apply_keeps_next_when_unset() {
        let mut state = TurnState::default();
        state.apply(TurnUpdate::route(Next::Accounting));
        state.apply(TurnUpdate::default());
        assert_eq!(state.next, Some(Next::Accounting));
    }

    #[test]
    fn test_next_serde_names() {
        assert_eq!(serde_json::to_string(&Next::Accounting).unwrap(), "\"accounting\"");
        assert_eq!(serde_json::from_str::<Next>("\"end\"").unwrap(), Next::End);
    }
}
