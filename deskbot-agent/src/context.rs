use deskbot_core::Message;

/// How many trailing history messages the domain agents show the model.
pub const CONTEXT_WINDOW: usize = 5;

/// System prompt followed by the last [`CONTEXT_WINDOW`] messages.
pub fn windowed_context(system: &str, history: &[Message]) -> Vec<Message> {
    let start = history.len().saturating_sub(CONTEXT_WINDOW);
    let mut context = Vec::with_capacity(1 + history.len() - start);
    context.push(Message::system(system));
    context.extend_from_slice(&history[start..]);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskbot_core::Role;

    #[test]
    fn test_window_keeps_last_five() {
        let history: Vec<Message> =
            (0..8).map(|i| Message::user(format!("msg {i}"))).collect();
        let context = windowed_context("sys", &history);

        assert_eq!(context.len(), 6);
        assert_eq!(context[0].role, Role::System);
        assert_eq!(context[1].content, "msg 3");
        assert_eq!(context[5].content, "msg 7");
    }

    #[test]
    fn test_window_short_history() {
        let context = windowed_context("sys", &[Message::user("only")]);
        assert_eq!(context.len(), 2);
    }
}
