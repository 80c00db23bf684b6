//! Terminal chat widget components.
//!
//! Markup is driven by htmx: the prompt form posts to the widget's messages
//! route and swaps the returned transcript fragment in place.

mod header;
mod prompt_input;
mod terminal;
mod transcript;

pub use header::TerminalHeader;
pub use prompt_input::PromptInput;
pub use terminal::TerminalChat;
pub use transcript::Transcript;

/// SSE stream of placeholder frames.
pub const PLACEHOLDER_PATH: &str = "/widget/placeholder";

/// Route of a mounted widget.
#[must_use]
pub fn widget_path(widget_id: &str) -> String {
    format!("/widget/chat/{widget_id}")
}

/// Submission route of a mounted widget.
#[must_use]
pub fn messages_path(widget_id: &str) -> String {
    format!("{}/messages", widget_path(widget_id))
}

/// Transcript fragment route of a mounted widget.
#[must_use]
pub fn transcript_path(widget_id: &str) -> String {
    format!("{}/transcript", widget_path(widget_id))
}

/// DOM id of a widget's transcript pane.
#[must_use]
pub fn transcript_dom_id(widget_id: &str) -> String {
    format!("transcript-{widget_id}")
}

/// DOM id of a widget's title bar.
#[must_use]
pub fn header_dom_id(widget_id: &str) -> String {
    format!("header-{widget_id}")
}
