//! Ready-made toggle control for Leptos hosts.

use leptos::prelude::*;

use crate::state::label::{self, LabelPolicy};
use crate::state::theme::Theme;

/// A toggle button wired into the theme manager.
///
/// Renders a `<button>` carrying the `data-toggle-theme` marker so the
/// manager's control discovery binds it, then mounts the manager once the
/// button is in the DOM. Activation handling, `aria-pressed`, and label
/// updates all flow through the manager's ordinary apply path; the component
/// adds no event wiring of its own.
#[component]
pub fn ThemeToggle(
    /// Whether the label names the next action or the current state.
    #[prop(optional)]
    label_policy: LabelPolicy,
) -> impl IntoView {
    // Effects only run in the browser, after this button is in the DOM, so
    // the manager's selector discovery is guaranteed to see it. A host page
    // that already mounted the manager wins; this call then only binds the
    // button if no control was bound yet.
    Effect::new(move |_| {
        crate::manager::mount_with(label_policy);
    });

    view! {
        <button
            type="button"
            class="theme-toggle"
            data-toggle-theme=""
            aria-pressed="false"
        >
            <span data-theme-label="">
                {label::toggle_label(Theme::default(), label_policy)}
            </span>
        </button>
    }
}
