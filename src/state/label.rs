//! Toggle control label policy.
//!
//! Pages in the wild disagree on whether the toggle's label names the
//! currently applied theme or the action a click will perform, so the choice
//! is an explicit configuration value rather than an inferred behavior.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use crate::consts::{
    DARK_MODE_LABEL, LIGHT_MODE_LABEL, SWITCH_TO_DARK_LABEL, SWITCH_TO_LIGHT_LABEL,
};
use crate::state::theme::Theme;

/// Which state the toggle control's label describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// The label describes what activating the control will do next
    /// (applied light ⇒ "Switch to dark mode").
    #[default]
    NextAction,
    /// The label names the currently applied theme.
    CurrentState,
}

/// The label text for the toggle control while `applied` is rendered.
#[must_use]
pub fn toggle_label(applied: Theme, policy: LabelPolicy) -> &'static str {
    match (policy, applied) {
        (LabelPolicy::NextAction, Theme::Light) => SWITCH_TO_DARK_LABEL,
        (LabelPolicy::NextAction, Theme::Dark) => SWITCH_TO_LIGHT_LABEL,
        (LabelPolicy::CurrentState, Theme::Light) => LIGHT_MODE_LABEL,
        (LabelPolicy::CurrentState, Theme::Dark) => DARK_MODE_LABEL,
    }
}
