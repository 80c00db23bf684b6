//! Reusable UI building blocks, rendered via Leptos SSR.
//!
//! - [`Button`]: terminal-styled button
//! - [`Badge`]: status pill
//! - icons: inline SVG icons

mod badge;
mod button;
mod icons;

pub use badge::{Badge, BadgeVariant};
pub use button::Button;
pub use icons::*;
