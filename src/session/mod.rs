//! Mounted chat widget management.
//!
//! Every page load mounts a fresh chat widget with its own id. Widgets live
//! in memory only: they are dropped on an explicit unmount or after sitting
//! idle, and are never persisted.
//!
//! # Example
//!
//! ```rust
//! use portfolio_widgets::chat::ChatPersona;
//! use portfolio_widgets::session::WidgetStore;
//!
//! let store = WidgetStore::new(ChatPersona::new("be brief", "email me"));
//! let widget = store.mount();
//! widget.update(|w| w.set_input("Hello!"));
//!
//! assert_eq!(widget.read(|w| w.history().input().to_string()), "Hello!");
//! assert_eq!(store.len(), 1);
//! ```

mod store;

pub use store::{DEFAULT_IDLE_TIMEOUT, WidgetHandle, WidgetStore};
