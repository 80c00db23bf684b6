//! Outbound chat endpoint client.
//!
//! The widget only knows one contract with its backend: `POST` a JSON body
//! `{ "messages": [{ "role", "content" }, ...] }` and read back
//! `{ "message": "..." }`. [`ChatBackend`] abstracts that round-trip so the
//! server can be exercised without a live endpoint.

use url::Url;

use super::{ChatError, ChatReply, ChatRequest};

/// One request/response exchange with the chat endpoint.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the request and return the assistant reply.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable reply body.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// [`ChatBackend`] that talks to the remote `/api/chat` endpoint over HTTP.
///
/// No timeout is configured on the client: a request runs until the endpoint
/// answers or the connection drops.
#[derive(Clone)]
pub struct HttpChatBackend {
    http: reqwest::Client,
    endpoint: Url,
}

impl std::fmt::Debug for HttpChatBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatBackend")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl HttpChatBackend {
    /// Create a backend posting to `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        tracing::debug!(
            name: "chat.backend.request",
            endpoint = %self.endpoint,
            messages = request.messages.len(),
            "Posting chat request"
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp.json::<ChatReply>().await?)
    }
}
