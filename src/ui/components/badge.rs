//! Badge component for status indicators.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Idle/positive state.
    #[default]
    Success,
    /// Work in progress.
    Warning,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Success => "border border-emerald-500/40 text-emerald-400",
            Self::Warning => "border border-amber-500/40 text-amber-300",
        }
    }
}

/// Small status pill.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Warning>"thinking"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Success)]
    variant: BadgeVariant,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center gap-1 rounded-full px-2 py-0.5 font-mono text-xs {}",
        variant.classes()
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
