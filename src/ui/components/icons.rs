//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they inherit `currentColor`
//! and can be sized with utility classes.

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Shared 24x24 stroke frame for every icon.
#[component]
fn IconFrame(
    /// Additional CSS classes.
    #[prop(into)]
    class: String,
    /// SVG shapes.
    children: Children,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {children()}
        </svg>
    }
}

/// Send/arrow-right icon.
#[component]
pub fn SendIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class}")}>
            <line x1="22" y1="2" x2="11" y2="13" />
            <polygon points="22 2 15 22 11 13 2 9 22 2" />
        </IconFrame>
    }
}

/// Loader/spinner icon.
#[component]
pub fn LoaderIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class} animate-spin")}>
            <path d="M21 12a9 9 0 1 1-6.219-8.56" />
        </IconFrame>
    }
}

/// Terminal prompt icon.
#[component]
pub fn TerminalIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class}")}>
            <polyline points="4 17 10 11 4 5" />
            <line x1="12" y1="19" x2="20" y2="19" />
        </IconFrame>
    }
}

/// GitHub mark.
#[component]
pub fn GithubIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class}")}>
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </IconFrame>
    }
}

/// Chat bubble used for the messaging link.
#[component]
pub fn WhatsappIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class}")}>
            <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" />
        </IconFrame>
    }
}

/// Instagram camera.
#[component]
pub fn InstagramIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class}")}>
            <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
        </IconFrame>
    }
}

/// Calendar icon for the scheduling link.
#[component]
pub fn CalendarIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class}")}>
            <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
            <line x1="16" y1="2" x2="16" y2="6" />
            <line x1="8" y1="2" x2="8" y2="6" />
            <line x1="3" y1="10" x2="21" y2="10" />
        </IconFrame>
    }
}

/// Envelope icon.
#[component]
pub fn MailIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class={format!("{ICON_SIZE} {class}")}>
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </IconFrame>
    }
}
