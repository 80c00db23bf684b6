//! Transcript pane.

use leptos::prelude::*;

use super::{transcript_dom_id, transcript_path};
use crate::chat::{Message, MessageRole};
use crate::ui::components::LoaderIcon;

/// Delay before a busy transcript re-fetches itself.
const REFRESH_DELAY: &str = "load delay:500ms";

/// Ordered transcript for one widget.
///
/// While a reply is pending the pane carries an htmx trigger that swaps in a
/// fresh copy of itself, so the reply shows up without client code.
#[component]
pub fn Transcript(
    /// Owning widget id.
    #[prop(into)]
    widget_id: String,
    /// Messages in display order.
    messages: Vec<Message>,
    /// Whether a reply is pending.
    #[prop(default = false)]
    busy: bool,
) -> impl IntoView {
    let refresh_url = busy.then(|| transcript_path(&widget_id));

    view! {
        <div
            id={transcript_dom_id(&widget_id)}
            class="flex-1 space-y-1 overflow-y-auto px-4 py-3 font-mono text-sm"
            aria-live="polite"
            aria-busy={if busy { "true" } else { "false" }}
            hx-get=refresh_url
            hx-trigger={busy.then_some(REFRESH_DELAY)}
            hx-swap={busy.then_some("outerHTML")}
        >
            {messages
                .into_iter()
                .map(|message| view! { <TranscriptLine message=message /> })
                .collect_view()}
            {busy.then(|| view! {
                <p class="flex items-center gap-2 text-zinc-500">
                    <LoaderIcon class="h-3 w-3" />
                    "thinking..."
                </p>
            })}
        </div>
    }
}

/// One transcript line, styled after a shell session.
#[component]
fn TranscriptLine(message: Message) -> impl IntoView {
    let (prompt, classes) = match message.role {
        MessageRole::User => ("$", "text-emerald-400"),
        _ => (">", "text-zinc-200"),
    };

    view! {
        <p class={format!("whitespace-pre-wrap break-words {classes}")} data-role={message.role.as_str()}>
            <span class="select-none text-zinc-500">{prompt}" "</span>
            {message.content}
        </p>
    }
}
