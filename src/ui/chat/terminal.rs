//! Terminal chat widget layout.

use leptos::prelude::*;

use super::{PromptInput, TerminalHeader, Transcript, widget_path};
use crate::chat::Message;

/// Complete terminal chat widget.
///
/// Provides:
/// - Title bar with the busy badge
/// - Transcript pane
/// - Prompt line with the animated placeholder
///
/// The widget removes its server-side state when the page is discarded.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <TerminalChat
///         widget_id="3f2c..."
///         messages=vec![]
///         placeholder="Ask me anything"
///     />
/// }
/// ```
#[component]
pub fn TerminalChat(
    /// Mounted widget id.
    #[prop(into)]
    widget_id: String,
    /// Transcript at render time.
    messages: Vec<Message>,
    /// Whether a reply is pending at render time.
    #[prop(default = false)]
    busy: bool,
    /// Initial placeholder text.
    #[prop(into, default = String::new())]
    placeholder: String,
) -> impl IntoView {
    // a page entering the back/forward cache may come back; keep its widget
    let unmount = format!(
        "window.addEventListener('pagehide', e => {{ if (!e.persisted) \
         fetch('{}', {{ method: 'DELETE', keepalive: true }}) }})",
        widget_path(&widget_id)
    );
    let dom_widget_id = widget_id.clone();
    let header_widget_id = widget_id.clone();
    let transcript_widget_id = widget_id.clone();

    view! {
        <section
            class="terminal-chat mx-auto flex h-[28rem] w-full max-w-2xl flex-col overflow-hidden \
                   rounded-xl border border-white/10 bg-zinc-950 shadow-2xl"
            data-widget-id=dom_widget_id
            x-data="{}"
            x-init=unmount
        >
            <TerminalHeader widget_id=header_widget_id busy=busy />
            <Transcript widget_id=transcript_widget_id messages=messages busy=busy />
            <PromptInput widget_id=widget_id placeholder=placeholder />
        </section>
    }
}
