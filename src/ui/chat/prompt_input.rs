//! Prompt line of the terminal widget.

use leptos::prelude::*;

use super::{PLACEHOLDER_PATH, messages_path, transcript_dom_id};
use crate::ui::components::{Button, SendIcon};

/// Input form posting the draft to the widget.
///
/// A blank draft gets `204 No Content` back, which htmx ignores, so the field
/// is left as it was. Any other answer swaps the transcript and resets the
/// form. The placeholder text is fed by the animator's SSE stream.
#[component]
pub fn PromptInput(
    /// Owning widget id.
    #[prop(into)]
    widget_id: String,
    /// Placeholder shown before the animator stream connects.
    #[prop(into, default = String::new())]
    placeholder: String,
) -> impl IntoView {
    let target = format!("#{}", transcript_dom_id(&widget_id));
    let init = format!(
        "$el.addEventListener('htmx:afterRequest', e => {{ \
         if (e.detail.xhr.status === 200) $el.reset() }}); \
         const feed = new EventSource('{PLACEHOLDER_PATH}'); \
         feed.addEventListener('placeholder', e => $refs.prompt.placeholder = e.data); \
         window.addEventListener('pagehide', () => feed.close())"
    );

    view! {
        <form
            class="flex items-center gap-2 border-t border-white/10 bg-zinc-950 px-4 py-2 font-mono text-sm"
            hx-post={messages_path(&widget_id)}
            hx-target=target
            hx-swap="outerHTML"
            x-data="{}"
            x-init=init
        >
            <span class="select-none text-emerald-500" aria-hidden="true">"$"</span>
            <input
                type="text"
                name="message"
                x-ref="prompt"
                class="flex-1 bg-transparent text-zinc-100 placeholder:text-zinc-600 focus:outline-none"
                placeholder=placeholder
                autocomplete="off"
                aria-label="Message"
            />
            <Button button_type="submit" label="Send">
                <SendIcon />
            </Button>
        </form>
    }
}
