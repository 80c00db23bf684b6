//! Page hosting both widgets.

use leptos::prelude::*;

use super::chat::TerminalChat;
use super::dock::DockBar;
use crate::chat::Message;
use crate::dock::{DockItem, HoverState};

/// Portfolio page document.
#[component]
pub fn PortfolioPage(
    /// Mounted chat widget id.
    #[prop(into)]
    widget_id: String,
    /// Transcript of the freshly mounted widget.
    messages: Vec<Message>,
    /// Dock buttons.
    dock_items: Vec<DockItem>,
    /// Initial dock hover flags.
    hover: HoverState,
    /// Placeholder shown before the animator connects.
    #[prop(into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Portfolio"</title>

                // local scripts only (no CDN)
                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-zinc-900 text-zinc-100 antialiased">
                <main id="app" class="container mx-auto max-w-5xl px-4 py-10 pb-32">
                    <TerminalChat
                        widget_id=widget_id
                        messages=messages
                        placeholder=placeholder
                    />
                </main>
                <DockBar items=dock_items hover=hover />
            </body>
        </html>
    }
}
