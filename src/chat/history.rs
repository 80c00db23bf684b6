//! Append-only transcript plus the current draft.

use serde::Serialize;

use super::Message;

/// Transcript and draft owned by one mounted chat widget.
///
/// The message log only grows: there is no way to remove or edit an entry
/// once it is pushed. The draft is cleared only when a submission is taken.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatHistory {
    messages: Vec<Message>,
    input: String,
}

impl ChatHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in insertion (and display) order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current draft text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the draft text.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Append a message to the end of the log.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Take the draft for submission.
    ///
    /// Returns `None` without touching the draft when it is empty or only
    /// whitespace. Otherwise the draft is cleared and returned trimmed.
    pub fn take_submission(&mut self) -> Option<String> {
        let content = self.input.trim();
        if content.is_empty() {
            return None;
        }
        let content = content.to_owned();
        self.input.clear();
        Some(content)
    }

    /// Number of messages in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageRole;

    #[test]
    fn test_blank_draft_is_not_taken() {
        let mut history = ChatHistory::new();

        history.set_input("   \t\n");
        assert_eq!(history.take_submission(), None);
        assert_eq!(history.input(), "   \t\n");

        history.set_input("");
        assert_eq!(history.take_submission(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_take_clears_draft_and_trims() {
        let mut history = ChatHistory::new();
        history.set_input("  Hola \n");

        assert_eq!(history.take_submission().as_deref(), Some("Hola"));
        assert_eq!(history.input(), "");
    }

    #[test]
    fn test_take_keeps_inner_whitespace() {
        let mut history = ChatHistory::new();
        history.set_input("\tline one\nline two  ");

        assert_eq!(
            history.take_submission().as_deref(),
            Some("line one\nline two")
        );
    }

    #[test]
    fn test_push_preserves_order() {
        let mut history = ChatHistory::new();
        history.push(Message::user("one"));
        history.push(Message::assistant("two"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].role, MessageRole::User);
        assert_eq!(history.messages()[1].content, "two");
    }
}
