//! Terminal chat widget state.
//!
//! # Overview
//!
//! - [`ChatHistory`]: append-only transcript plus the current draft
//! - [`ChatWidget`]: submission flow over a history (busy flag, fallback)
//! - [`ChatBackend`]: the single request/response exchange with the chat
//!   endpoint, implemented over HTTP by [`HttpChatBackend`]
//!
//! # Example
//!
//! ```rust
//! use portfolio_widgets::chat::{ChatPersona, ChatWidget, Message};
//!
//! let mut widget = ChatWidget::new(ChatPersona::new("be brief", "email me"));
//! widget.set_input("Hola");
//! let request = widget.begin_submit().unwrap();
//!
//! assert_eq!(widget.messages(), &[Message::user("Hola")]);
//! assert_eq!(widget.history().input(), "");
//! assert_eq!(request.messages.len(), 2);
//! ```

mod client;
mod error;
mod history;
mod message;
mod widget;

pub use client::{ChatBackend, HttpChatBackend};
pub use error::ChatError;
pub use history::ChatHistory;
pub use message::{Message, MessageRole};
pub use widget::{ChatPersona, ChatReply, ChatRequest, ChatWidget};
