//! Server-rendered widget markup.
//!
//! This module provides Leptos SSR components for the portfolio page and
//! render helpers returning HTML strings for axum handlers.
//!
//! # Structure
//!
//! - [`page`]: full page document
//! - [`dock`]: dock bar and buttons
//! - [`chat`]: terminal chat widget
//! - [`components`]: shared buttons, badges, and icons

pub mod chat;
pub mod components;
pub mod dock;
pub mod page;

use leptos::prelude::*;

use crate::chat::Message;
use crate::dock::{DockItem, HoverState};
use chat::{TerminalHeader, Transcript};
use page::PortfolioPage;

/// Data needed to render the portfolio page.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Freshly mounted widget id.
    pub widget_id: String,
    /// Transcript of that widget.
    pub messages: Vec<Message>,
    /// Dock buttons in display order.
    pub dock_items: Vec<DockItem>,
    /// Initial dock hover flags.
    pub hover: HoverState,
    /// Placeholder shown before the animator stream connects.
    pub placeholder: String,
}

/// Render the full page document.
#[must_use]
pub fn render_page(page: PageView) -> String {
    let PageView {
        widget_id,
        messages,
        dock_items,
        hover,
        placeholder,
    } = page;

    let body = view! {
        <PortfolioPage
            widget_id=widget_id
            messages=messages
            dock_items=dock_items
            hover=hover
            placeholder=placeholder
        />
    }
    .to_html();

    format!("<!DOCTYPE html>{body}")
}

/// Render the transcript fragment swapped in by htmx.
///
/// The title bar rides along as an out-of-band swap so its busy badge
/// tracks the transcript.
#[must_use]
pub fn render_transcript(widget_id: &str, messages: Vec<Message>, busy: bool) -> String {
    view! {
        <Transcript widget_id=widget_id.to_string() messages=messages busy=busy />
        <TerminalHeader widget_id=widget_id.to_string() busy=busy oob=true />
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dock::Dock;

    #[test]
    fn test_transcript_renders_lines_in_order() {
        let html = render_transcript(
            "w1",
            vec![Message::user("Hola"), Message::assistant("¡Hola!")],
            false,
        );

        let user = html.find("Hola").unwrap();
        let reply = html.find("¡Hola!").unwrap();
        assert!(user < reply);
        assert!(html.contains(r#"id="transcript-w1""#));
        assert!(!html.contains("hx-get"));
    }

    #[test]
    fn test_busy_transcript_refreshes_itself() {
        let html = render_transcript("w1", vec![Message::user("hi")], true);

        assert!(html.contains(r#"hx-get="/widget/chat/w1/transcript""#));
        assert!(html.contains("thinking..."));
    }

    #[test]
    fn test_transcript_carries_header_out_of_band() {
        let busy = render_transcript("w1", vec![Message::user("hi")], true);
        assert!(busy.contains(r#"id="header-w1""#));
        assert!(busy.contains(r#"hx-swap-oob="true""#));
        assert!(busy.contains("border-amber-500/40"));

        let idle = render_transcript("w1", vec![Message::user("hi")], false);
        assert!(idle.contains(r#"hx-swap-oob="true""#));
        assert!(idle.contains("ready"));
        assert!(!idle.contains("border-amber-500/40"));
    }

    #[test]
    fn test_transcript_escapes_content() {
        let html = render_transcript("w1", vec![Message::user("<script>x</script>")], false);
        assert!(!html.contains("<script>x"));
    }

    #[test]
    fn test_page_contains_both_widgets() {
        let dock = Dock::default();
        let html = render_page(PageView {
            widget_id: "abc".into(),
            messages: vec![],
            dock_items: dock.items().to_vec(),
            hover: dock.hover_state(),
            placeholder: "Ask me".into(),
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"hx-post="/widget/chat/abc/messages""#));
        assert!(html.contains(r#"placeholder="Ask me""#));
        assert!(html.contains("mailto:hello@example.com"));
        assert!(html.contains(r#"data-dock-icon="github""#));
        assert!(html.contains("hovered.instagram = true"));
        assert!(html.contains(r#"id="header-abc""#));
        assert!(!html.contains("hx-swap-oob"));
    }

    #[test]
    fn test_unmount_skips_back_forward_cache() {
        let html = render_page(PageView {
            widget_id: "abc".into(),
            messages: vec![],
            dock_items: vec![],
            hover: HoverState::default(),
            placeholder: String::new(),
        });

        assert!(html.contains("!e.persisted"));
        assert!(html.contains("/widget/chat/abc"));
    }

    #[test]
    fn test_terminal_dock_button_has_no_link() {
        let dock = Dock::default();
        let html = render_page(PageView {
            widget_id: "abc".into(),
            messages: vec![],
            dock_items: dock.items().to_vec(),
            hover: dock.hover_state(),
            placeholder: String::new(),
        });

        let start = html.find(r#"data-dock-icon="terminal""#).unwrap();
        let button_open = html[..start].rfind('<').unwrap();
        assert!(html[button_open..].starts_with("<button"));
        assert!(html.contains("hovered.terminal = true"));
    }
}
