//! Dark/light theme resolution, persistence, and cross-tab synchronization.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the page theme: resolving the effective theme from the
//! stored user choice and the OS-level preference, rendering it to the
//! document, persisting explicit choices to `localStorage`, and keeping every
//! open tab and listener in agreement. The host page supplies the CSS meaning
//! of "dark" and "light" and, optionally, a toggle control; this crate only
//! reads and writes the agreed markers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure, natively-testable model: [`state::theme::Theme`], the [`state::core::ThemeCore`] state machine, and the label policy |
//! | [`dom`] | Guarded browser access: storage, media query, surface mutation, control discovery |
//! | [`manager`] | Mount entry point, the owned state cell, and the three page-lifetime subscriptions |
//! | [`components`] | Ready-made Leptos toggle control |
//! | [`consts`] | Storage key, marker names, selector table, label text |

pub mod components;
pub mod consts;
pub mod dom;
pub mod manager;
pub mod state;
