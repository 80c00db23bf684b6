//! Dock of social and contact links.
//!
//! The dock is a fixed row of buttons. Most are bound to a navigation side
//! effect (an external URL or a `mailto:` link); the terminal button only
//! shows its tooltip. Every button owns a binary hover flag. Navigation is
//! left to the browser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Icon identifier; also the key of the item's hover flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockIcon {
    /// Source code hosting profile.
    Github,
    /// Messaging deep link.
    Whatsapp,
    /// Photo profile.
    Instagram,
    /// Scheduling service.
    Calendar,
    /// Email.
    Mail,
    /// Terminal, pointing at the chat widget.
    Terminal,
}

impl DockIcon {
    /// Stable identifier used in markup and client state.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Whatsapp => "whatsapp",
            Self::Instagram => "instagram",
            Self::Calendar => "calendar",
            Self::Mail => "mail",
            Self::Terminal => "terminal",
        }
    }
}

/// What happens when a dock button is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DockAction {
    /// Open an external page.
    OpenUrl {
        /// Destination.
        url: Url,
    },
    /// Open the visitor's mail client.
    Mailto {
        /// Recipient address.
        address: String,
    },
    /// Hover-only button: shows its tooltip, clicking does nothing.
    None,
}

impl DockAction {
    /// Link target for the button, `None` for the inert action.
    #[must_use]
    pub fn href(&self) -> Option<String> {
        match self {
            Self::OpenUrl { url } => Some(url.to_string()),
            Self::Mailto { address } => Some(format!("mailto:{address}")),
            Self::None => None,
        }
    }

    /// External pages open in a new tab; mail links stay in place.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        matches!(self, Self::OpenUrl { .. })
    }
}

/// One button in the dock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockItem {
    /// Icon, doubling as the hover key.
    pub icon: DockIcon,
    /// Tooltip text.
    pub label: String,
    /// Click behavior.
    pub action: DockAction,
}

impl DockItem {
    fn link(icon: DockIcon, label: &str, url: &str) -> Option<Self> {
        Some(Self {
            icon,
            label: label.to_string(),
            action: DockAction::OpenUrl {
                url: Url::parse(url).ok()?,
            },
        })
    }
}

/// Ordered set of dock buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dock {
    items: Vec<DockItem>,
}

impl Dock {
    /// Create a dock from items, in display order.
    #[must_use]
    pub fn new(items: Vec<DockItem>) -> Self {
        Self { items }
    }

    /// Stock set of contact links.
    #[must_use]
    pub fn default_items() -> Vec<DockItem> {
        let mut items: Vec<DockItem> = [
            (DockIcon::Github, "GitHub", "https://github.com/"),
            (DockIcon::Whatsapp, "WhatsApp", "https://wa.me/"),
            (DockIcon::Instagram, "Instagram", "https://www.instagram.com/"),
            (DockIcon::Calendar, "Book a call", "https://calendly.com/"),
        ]
        .into_iter()
        .filter_map(|(icon, label, url)| DockItem::link(icon, label, url))
        .collect();

        items.push(DockItem {
            icon: DockIcon::Mail,
            label: "Email".to_string(),
            action: DockAction::Mailto {
                address: "hello@example.com".to_string(),
            },
        });
        items.push(DockItem {
            icon: DockIcon::Terminal,
            label: "Terminal".to_string(),
            action: DockAction::None,
        });
        items
    }

    /// Buttons in display order.
    #[must_use]
    pub fn items(&self) -> &[DockItem] {
        &self.items
    }

    /// Hover state with every flag cleared.
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        HoverState::new(self.items.iter().map(|item| item.icon))
    }
}

impl Default for Dock {
    fn default() -> Self {
        Self::new(Self::default_items())
    }
}

/// Per-icon hover flags.
///
/// Pointer-enter sets an icon's flag, pointer-leave clears it. Flags are
/// independent and never persisted; the browser keeps the live copy, seeded
/// from [`to_alpine_data`](Self::to_alpine_data).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HoverState {
    hovered: BTreeMap<DockIcon, bool>,
}

impl HoverState {
    /// Create cleared flags for `icons`.
    pub fn new(icons: impl IntoIterator<Item = DockIcon>) -> Self {
        Self {
            hovered: icons.into_iter().map(|icon| (icon, false)).collect(),
        }
    }

    /// Pointer entered `icon`.
    pub fn enter(&mut self, icon: DockIcon) {
        self.hovered.insert(icon, true);
    }

    /// Pointer left `icon`.
    pub fn leave(&mut self, icon: DockIcon) {
        self.hovered.insert(icon, false);
    }

    /// Whether `icon`'s tooltip is showing.
    #[must_use]
    pub fn is_hovered(&self, icon: DockIcon) -> bool {
        self.hovered.get(&icon).copied().unwrap_or(false)
    }

    /// Alpine `x-data` object holding the flags, e.g. `{"hovered":{"github":false}}`.
    #[must_use]
    pub fn to_alpine_data(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"hovered":{}}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dock_has_every_link() {
        let dock = Dock::default();
        let icons: Vec<_> = dock.items().iter().map(|i| i.icon).collect();
        assert_eq!(
            icons,
            vec![
                DockIcon::Github,
                DockIcon::Whatsapp,
                DockIcon::Instagram,
                DockIcon::Calendar,
                DockIcon::Mail,
                DockIcon::Terminal
            ]
        );
    }

    #[test]
    fn test_action_hrefs() {
        let mail = DockAction::Mailto {
            address: "me@example.com".into(),
        };
        assert_eq!(mail.href().as_deref(), Some("mailto:me@example.com"));
        assert!(!mail.opens_new_tab());

        let url = DockAction::OpenUrl {
            url: Url::parse("https://github.com/someone").unwrap(),
        };
        assert_eq!(url.href().as_deref(), Some("https://github.com/someone"));
        assert!(url.opens_new_tab());

        assert_eq!(DockAction::None.href(), None);
        assert!(!DockAction::None.opens_new_tab());
    }

    #[test]
    fn test_hover_flags_are_independent() {
        let mut hover = Dock::default().hover_state();

        hover.enter(DockIcon::Github);
        hover.enter(DockIcon::Mail);
        hover.leave(DockIcon::Mail);

        assert!(hover.is_hovered(DockIcon::Github));
        assert!(!hover.is_hovered(DockIcon::Mail));
        assert!(!hover.is_hovered(DockIcon::Instagram));
    }

    #[test]
    fn test_alpine_data_shape() {
        let mut hover = HoverState::new([DockIcon::Github, DockIcon::Mail]);
        hover.enter(DockIcon::Mail);

        assert_eq!(
            hover.to_alpine_data(),
            r#"{"hovered":{"github":false,"mail":true}}"#
        );
    }

    #[test]
    fn test_items_deserialize_from_config_shape() {
        let item: DockItem = serde_json::from_value(serde_json::json!({
            "icon": "mail",
            "label": "Email",
            "action": { "kind": "mailto", "address": "a@b.c" }
        }))
        .unwrap();
        assert_eq!(item.action.href().as_deref(), Some("mailto:a@b.c"));

        let terminal: DockItem = serde_json::from_value(serde_json::json!({
            "icon": "terminal",
            "label": "Terminal",
            "action": { "kind": "none" }
        }))
        .unwrap();
        assert_eq!(terminal.action, DockAction::None);
    }
}
