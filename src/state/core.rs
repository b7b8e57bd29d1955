//! The theme synchronization state machine.
//!
//! Two reachable states per tab: *following-system* (no explicit choice yet)
//! and *pinned* (an explicit choice is recorded). The only transition is
//! following-system → pinned, on an explicit toggle or on observing a valid
//! cross-tab write; nothing here ever transitions back.

#[cfg(test)]
#[path = "core_test.rs"]
mod core_test;

use crate::state::theme::{self, Theme};

/// Side effect requested by a transition, executed by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do; the trigger was ignored.
    None,
    /// Render `theme` to the presentation surface, and persist it as the
    /// stored preference when `persist` is set (explicit user choice only).
    Apply {
        /// The theme to render.
        theme: Theme,
        /// Whether the value must also be written to storage.
        persist: bool,
    },
}

/// Core synchronization state — all logic that doesn't depend on the browser.
///
/// Separated from the DOM manager so it can be tested without WASM/browser
/// dependencies. Trigger handlers mutate the state and return the [`Action`]
/// the shell should execute; they never touch the document themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeCore {
    applied: Theme,
    pinned: bool,
}

impl ThemeCore {
    /// Build the initial state from the raw stored value and the current
    /// system signal. A malformed stored value counts as absent.
    #[must_use]
    pub fn boot(stored_raw: Option<&str>, system_dark: bool) -> (Self, Action) {
        let stored = stored_raw.and_then(Theme::parse);
        let applied = theme::resolve(stored, system_dark);
        let core = Self { applied, pinned: stored.is_some() };
        (core, Action::Apply { theme: applied, persist: false })
    }

    /// Explicit toggle activation: switch to the inverse of the applied
    /// theme, pin, and persist the new choice.
    pub fn on_toggle(&mut self) -> Action {
        self.applied = self.applied.inverse();
        self.pinned = true;
        Action::Apply { theme: self.applied, persist: true }
    }

    /// System preference change notification. Ignored once pinned: an
    /// explicit choice is never overridden automatically.
    pub fn on_system_change(&mut self, system_dark: bool) -> Action {
        if self.pinned {
            return Action::None;
        }
        self.applied = Theme::from_system(system_dark);
        Action::Apply { theme: self.applied, persist: false }
    }

    /// Cross-tab storage change. A valid new value is adopted without
    /// re-persisting (the originating tab already wrote it) and pins this
    /// tab, since a valid write implies some tab recorded an explicit
    /// choice. Invalid or absent values are ignored.
    pub fn on_storage_change(&mut self, new_value: Option<&str>) -> Action {
        let Some(theme) = new_value.and_then(Theme::parse) else {
            return Action::None;
        };
        self.applied = theme;
        self.pinned = true;
        Action::Apply { theme, persist: false }
    }

    /// The theme currently rendered to the presentation surface.
    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    /// Whether an explicit choice has been recorded.
    #[must_use]
    pub fn pinned(&self) -> bool {
        self.pinned
    }
}
