//! Leptos components bound to the theme manager.

pub mod theme_toggle;
