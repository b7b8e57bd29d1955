//! Pure client-side theme model.
//!
//! DESIGN
//! ======
//! Everything under `state` is free of browser dependencies so the
//! resolution and synchronization rules can be tested with plain
//! `cargo test`. Trigger handlers return [`core::Action`] values describing
//! the side effects the browser shell should execute, rather than mutating
//! the document directly.

pub mod core;
pub mod label;
pub mod theme;
