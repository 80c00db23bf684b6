//! Portfolio widgets
//!
//! Server-rendered widgets for a personal portfolio site: a dock of contact
//! links and a terminal-styled chat that proxies visitor questions to a
//! remote chat endpoint.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server serving the page, htmx fragments, and SSE
//! - **UI**: Leptos SSR + HTMX + Alpine.js
//! - **Chat**: append-only transcript and a single request/response round-trip
//!
//! # Modules
//!
//! - [`chat`]: transcript, submission flow, and chat endpoint client
//! - [`placeholder`]: typewriter placeholder animator
//! - [`dock`]: dock links and hover state
//! - [`session`]: mounted widget store
//! - [`ui`]: Leptos SSR components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod chat;
pub mod config;
pub mod dock;
pub mod placeholder;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use crate::chat::ChatBackend;
use crate::config::AppConfig;
use crate::dock::Dock;
use crate::session::WidgetStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Mounted chat widgets.
    pub widgets: WidgetStore,
    /// Chat endpoint client.
    pub backend: Arc<dyn ChatBackend>,
    /// Dock links.
    pub dock: Arc<Dock>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("widgets", &self.widgets.len())
            .field("dock", &self.dock)
            .finish()
    }
}

impl AppState {
    /// Build state from configuration and a chat backend.
    #[must_use]
    pub fn new(config: Arc<AppConfig>, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            widgets: WidgetStore::new(config.chat.persona()),
            backend,
            dock: Arc::new(Dock::new(config.dock.items.clone())),
            config,
        }
    }
}
