//! Terminal-styled button.

use leptos::prelude::*;

/// Borderless monospace button used inside the terminal widget.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button button_type="submit" label="Send">
///         <SendIcon />
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label.
    #[prop(default = "")]
    label: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex h-8 w-8 items-center justify-center rounded-md font-mono \
         text-emerald-400 transition-colors hover:bg-emerald-500/10 \
         focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-emerald-500 \
         disabled:pointer-events-none disabled:opacity-50 {class}"
    );

    view! {
        <button type=button_type class=classes aria-label=label>
            {children()}
        </button>
    }
}
