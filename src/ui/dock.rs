//! Dock of contact links.
//!
//! Each button's tooltip is bound to its own Alpine hover flag, seeded from
//! [`HoverState`]. Clicking follows a plain link, so navigation is entirely
//! the browser's; items without a link render as inert buttons.

use leptos::prelude::*;

use crate::dock::{DockIcon, DockItem, HoverState};
use crate::ui::components::{
    CalendarIcon, GithubIcon, InstagramIcon, MailIcon, TerminalIcon, WhatsappIcon,
};

/// Row of dock buttons.
#[component]
pub fn DockBar(
    /// Buttons in display order.
    items: Vec<DockItem>,
    /// Initial hover flags.
    hover: HoverState,
) -> impl IntoView {
    let alpine_data = hover.to_alpine_data();

    view! {
        <nav
            class="dock fixed bottom-4 left-1/2 -translate-x-1/2 flex items-end gap-3 \
                   rounded-2xl border border-white/10 bg-white/5 px-3 py-2 backdrop-blur-md"
            aria-label="Contact links"
            x-data=alpine_data
        >
            {items
                .into_iter()
                .map(|item| {
                    let hovered = hover.is_hovered(item.icon);
                    view! { <DockButton item=item hovered=hovered /> }
                })
                .collect_view()}
        </nav>
    }
}

/// Single dock button with its hover tooltip.
#[component]
pub fn DockButton(
    /// Link and icon.
    item: DockItem,
    /// Whether the tooltip starts visible.
    #[prop(default = false)]
    hovered: bool,
) -> impl IntoView {
    let DockItem {
        icon,
        label,
        action,
    } = item;
    let id = icon.id();
    let tooltip = label.clone();
    let classes = "flex h-12 w-12 items-center justify-center rounded-xl bg-white/10 \
                   text-white transition-transform hover:-translate-y-1 hover:scale-110";

    let control = match action.href() {
        Some(href) => {
            let new_tab = action.opens_new_tab();
            view! {
                <a
                    href=href
                    target={new_tab.then_some("_blank")}
                    rel={new_tab.then_some("noopener noreferrer")}
                    aria-label=label
                    data-dock-icon=id
                    class=classes
                    x-on:mouseenter={format!("hovered.{id} = true")}
                    x-on:mouseleave={format!("hovered.{id} = false")}
                >
                    <DockGlyph icon=icon />
                </a>
            }
            .into_any()
        }
        // hover-only: tooltip, no click effect
        None => view! {
            <button
                type="button"
                aria-label=label
                data-dock-icon=id
                class=classes
                x-on:mouseenter={format!("hovered.{id} = true")}
                x-on:mouseleave={format!("hovered.{id} = false")}
            >
                <DockGlyph icon=icon />
            </button>
        }
        .into_any(),
    };

    view! {
        <div class="relative flex flex-col items-center">
            <span
                class="dock-tooltip absolute -top-8 whitespace-nowrap rounded-md bg-black/80 px-2 py-1 text-xs text-white"
                role="tooltip"
                x-show={format!("hovered.{id}")}
                style={if hovered { "" } else { "display: none" }}
            >
                {tooltip}
            </span>
            {control}
        </div>
    }
}

/// Icon artwork for a dock entry.
#[component]
fn DockGlyph(icon: DockIcon) -> impl IntoView {
    match icon {
        DockIcon::Github => view! { <GithubIcon class="h-6 w-6" /> }.into_any(),
        DockIcon::Whatsapp => view! { <WhatsappIcon class="h-6 w-6" /> }.into_any(),
        DockIcon::Instagram => view! { <InstagramIcon class="h-6 w-6" /> }.into_any(),
        DockIcon::Calendar => view! { <CalendarIcon class="h-6 w-6" /> }.into_any(),
        DockIcon::Mail => view! { <MailIcon class="h-6 w-6" /> }.into_any(),
        DockIcon::Terminal => view! { <TerminalIcon class="h-6 w-6" /> }.into_any(),
    }
}
