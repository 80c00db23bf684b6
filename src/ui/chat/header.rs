//! Terminal title bar.

use leptos::prelude::*;

use super::header_dom_id;
use crate::ui::components::{Badge, BadgeVariant, LoaderIcon, TerminalIcon};

/// Title shown in the bar.
const TERMINAL_TITLE: &str = "ask-me.sh";

/// Title bar with window dots, title, and the busy badge.
///
/// With `oob` set the bar is marked for an htmx out-of-band swap, so it can
/// ride along with a transcript fragment and replace the bar on the page.
#[component]
pub fn TerminalHeader(
    /// Owning widget id.
    #[prop(into)]
    widget_id: String,
    /// Title displayed in the bar.
    #[prop(default = TERMINAL_TITLE)]
    title: &'static str,
    /// Whether a reply is pending.
    #[prop(default = false)]
    busy: bool,
    /// Render for an out-of-band swap.
    #[prop(default = false)]
    oob: bool,
) -> impl IntoView {
    let status = if busy {
        view! {
            <Badge variant=BadgeVariant::Warning>
                <LoaderIcon class="h-3 w-3" />
                "thinking"
            </Badge>
        }
        .into_any()
    } else {
        view! { <Badge variant=BadgeVariant::Success>"ready"</Badge> }.into_any()
    };

    view! {
        <header
            id={header_dom_id(&widget_id)}
            class="flex items-center justify-between border-b border-white/10 bg-zinc-900 px-3 py-2"
            hx-swap-oob={oob.then_some("true")}
        >
            <div class="flex items-center gap-1.5" aria-hidden="true">
                <span class="h-3 w-3 rounded-full bg-red-500/80"></span>
                <span class="h-3 w-3 rounded-full bg-yellow-500/80"></span>
                <span class="h-3 w-3 rounded-full bg-green-500/80"></span>
            </div>
            <div class="flex items-center gap-2 font-mono text-xs text-zinc-400">
                <TerminalIcon class="h-3.5 w-3.5" />
                <span>{title}</span>
            </div>
            {status}
        </header>
    }
}
