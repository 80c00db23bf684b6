//! Chat widget submission flow.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ChatBackend, ChatError, ChatHistory, Message};

/// Body posted to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// System prompt, then the prior transcript, then the new user message.
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Assemble the outbound message list for a new user message.
    #[must_use]
    pub fn build(system_prompt: &str, transcript: &[Message], content: &str) -> Self {
        let mut messages = Vec::with_capacity(transcript.len() + 2);
        messages.push(Message::system(system_prompt));
        messages.extend_from_slice(transcript);
        messages.push(Message::user(content));
        Self { messages }
    }
}

/// Reply body returned by the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant text.
    pub message: String,
}

/// Fixed texts a widget is configured with.
#[derive(Debug, Clone)]
pub struct ChatPersona {
    /// Instruction sent as the first message of every request.
    pub system_prompt: Arc<str>,
    /// Assistant text appended when a request fails for any reason.
    pub fallback_message: Arc<str>,
    /// Assistant greeting every freshly mounted widget opens with.
    pub welcome_message: Option<Arc<str>>,
}

impl ChatPersona {
    /// Create a persona from its two fixed texts.
    #[must_use]
    pub fn new(system_prompt: impl Into<Arc<str>>, fallback_message: impl Into<Arc<str>>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            fallback_message: fallback_message.into(),
            welcome_message: None,
        }
    }

    /// Open every widget with `welcome` as its first assistant message.
    ///
    /// The greeting is part of the transcript, so it is also sent back as
    /// context with every request.
    #[must_use]
    pub fn with_welcome(mut self, welcome: impl Into<Arc<str>>) -> Self {
        self.welcome_message = Some(welcome.into());
        self
    }
}

/// State of one mounted terminal chat widget.
///
/// Submission is split in two halves, [`begin_submit`](Self::begin_submit)
/// and [`complete`](Self::complete), so a caller sharing the widget behind a
/// lock can release it while the request is in flight.
///
/// There is no guard against overlapping submissions: `begin_submit` is
/// accepted while busy, and the first completion clears `busy` even when a
/// later request is still outstanding.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    history: ChatHistory,
    busy: bool,
    persona: ChatPersona,
}

impl ChatWidget {
    /// Create a freshly mounted widget, greeted by the persona's welcome
    /// message when it has one.
    #[must_use]
    pub fn new(persona: ChatPersona) -> Self {
        let mut history = ChatHistory::new();
        if let Some(welcome) = &persona.welcome_message {
            history.push(Message::assistant(&**welcome));
        }
        Self {
            history,
            busy: false,
            persona,
        }
    }

    /// Transcript and draft.
    #[must_use]
    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Messages in display order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.history.messages()
    }

    /// Whether a request is awaiting its resolution.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Replace the draft text.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.history.set_input(input);
    }

    /// Start a submission of the current draft.
    ///
    /// Blank drafts are rejected with `None` and leave the widget untouched.
    /// Otherwise the user message is appended, the draft cleared, `busy` set,
    /// and the request to send is returned.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        let content = self.history.take_submission()?;
        let request = ChatRequest::build(
            &self.persona.system_prompt,
            self.history.messages(),
            &content,
        );

        self.history.push(Message::user(content));
        self.busy = true;

        tracing::info!(
            name: "chat.submit.started",
            transcript_len = self.history.len(),
            "Chat submission started"
        );

        Some(request)
    }

    /// Resolve a submission with the backend outcome.
    ///
    /// Appends the reply on success, or the fallback message on any error,
    /// and clears `busy` either way.
    pub fn complete(&mut self, outcome: Result<ChatReply, ChatError>) -> &Message {
        let message = match outcome {
            Ok(reply) => {
                tracing::info!(name: "chat.submit.completed", "Chat reply received");
                Message::assistant(reply.message)
            }
            Err(e) => {
                tracing::warn!(
                    name: "chat.submit.failed",
                    error = %e,
                    "Chat request failed, using fallback"
                );
                Message::assistant(&*self.persona.fallback_message)
            }
        };

        self.history.push(message);
        self.busy = false;

        // push above guarantees a last element
        &self.history.messages()[self.history.len() - 1]
    }

    /// Run a full submission against `backend`.
    ///
    /// Returns `None` if the draft was blank and nothing was sent.
    pub async fn submit(&mut self, backend: &dyn ChatBackend) -> Option<&Message> {
        let request = self.begin_submit()?;
        let outcome = backend.send(&request).await;
        Some(self.complete(outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::chat::MessageRole;

    const FALLBACK: &str = "Reach me by email instead.";

    fn widget() -> ChatWidget {
        ChatWidget::new(ChatPersona::new("be brief", FALLBACK))
    }

    /// Records every request and answers with a canned outcome.
    struct Recorder {
        reply: Option<String>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    #[async_trait::async_trait]
    impl ChatBackend for Recorder {
        async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Some(message) => Ok(ChatReply {
                    message: message.clone(),
                }),
                None => Err(ChatError::Status { status: 502 }),
            }
        }
    }

    #[test]
    fn test_fresh_widget_opens_with_welcome() {
        let w = ChatWidget::new(ChatPersona::new("be brief", FALLBACK).with_welcome("Hi there"));

        assert_eq!(w.messages(), &[Message::assistant("Hi there")]);
        assert!(!w.is_busy());
        assert!(ChatWidget::new(ChatPersona::new("be brief", FALLBACK)).messages().is_empty());
    }

    #[test]
    fn test_first_request_carries_welcome() {
        let mut w = ChatWidget::new(ChatPersona::new("be brief", FALLBACK).with_welcome("Hi there"));
        w.set_input("Hola");

        let request = w.begin_submit().unwrap();

        assert_eq!(
            request.messages,
            vec![
                Message::system("be brief"),
                Message::assistant("Hi there"),
                Message::user("Hola")
            ]
        );
    }

    #[test]
    fn test_submission_is_trimmed_in_transcript_and_request() {
        let mut w = widget();
        w.set_input("  Hola \n");

        let request = w.begin_submit().unwrap();

        assert_eq!(w.messages(), &[Message::user("Hola")]);
        assert_eq!(request.messages.last(), Some(&Message::user("Hola")));
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut w = widget();
        w.set_input("  ");

        assert!(w.begin_submit().is_none());
        assert!(w.messages().is_empty());
        assert_eq!(w.history().input(), "  ");
        assert!(!w.is_busy());
    }

    #[test]
    fn test_begin_submit_appends_user_and_clears_input() {
        let mut w = widget();
        w.set_input("Hola");

        let request = w.begin_submit().unwrap();

        assert_eq!(w.messages(), &[Message::user("Hola")]);
        assert_eq!(w.history().input(), "");
        assert!(w.is_busy());
        assert_eq!(
            request.messages,
            vec![Message::system("be brief"), Message::user("Hola")]
        );
    }

    #[test]
    fn test_request_carries_prior_transcript() {
        let mut w = widget();
        w.set_input("first");
        w.begin_submit().unwrap();
        w.complete(Ok(ChatReply {
            message: "answer".into(),
        }));

        w.set_input("second");
        let request = w.begin_submit().unwrap();

        let roles: Vec<_> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User
            ]
        );
        assert_eq!(request.messages[3].content, "second");
    }

    #[test]
    fn test_failure_appends_fallback_and_keeps_prior_messages() {
        let mut w = widget();
        w.set_input("hi");
        w.begin_submit().unwrap();
        let before = w.messages().to_vec();

        let appended = w.complete(Err(ChatError::Status { status: 503 })).clone();

        assert_eq!(appended, Message::assistant(FALLBACK));
        assert_eq!(&w.messages()[..before.len()], before.as_slice());
        assert!(!w.is_busy());
    }

    #[test]
    fn test_overlapping_submissions_are_not_guarded() {
        let mut w = widget();
        w.set_input("a");
        w.begin_submit().unwrap();
        w.set_input("b");
        assert!(w.begin_submit().is_some());

        w.complete(Ok(ChatReply {
            message: "for a".into(),
        }));
        // second request still outstanding, flag already cleared
        assert!(!w.is_busy());
        assert_eq!(w.messages().len(), 3);
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let backend = Recorder {
            reply: Some("¡Hola!".into()),
            seen: Mutex::new(Vec::new()),
        };
        let mut w = widget();
        w.set_input("Hola");

        let reply = w.submit(&backend).await.cloned();

        assert_eq!(reply, Some(Message::assistant("¡Hola!")));
        assert_eq!(w.messages().len(), 2);
        assert_eq!(backend.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_submit_sends_nothing() {
        let backend = Recorder {
            reply: None,
            seen: Mutex::new(Vec::new()),
        };
        let mut w = widget();
        w.set_input("\n");

        assert!(w.submit(&backend).await.is_none());
        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_uses_fallback() {
        let backend = Recorder {
            reply: None,
            seen: Mutex::new(Vec::new()),
        };
        let mut w = widget();
        w.set_input("hi");

        let reply = w.submit(&backend).await.cloned();
        assert_eq!(reply, Some(Message::assistant(FALLBACK)));
        assert!(!w.is_busy());
    }
}
