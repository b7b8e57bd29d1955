//! Rendering a resolved theme to the presentation surface.

#[cfg(feature = "hydrate")]
use crate::consts::{DARK_CLASS, DATA_THEME_ATTR, LABEL_SELECTOR, LIGHT_CLASS, NO_JS_CLASS};
#[cfg(feature = "hydrate")]
use crate::dom::control;
#[cfg(feature = "hydrate")]
use crate::state::label;
use crate::state::label::LabelPolicy;
use crate::state::theme::Theme;

/// Render `theme` to the document. Idempotent: re-applying the same theme
/// leaves the observable attribute/class/control state unchanged.
///
/// Updates, each skipped when its target is missing:
/// - `data-theme` on the root element;
/// - the boolean `dark` class on the root element;
/// - `dark`/`light` classes on `<body>`, for style rules that key off the
///   body rather than the root;
/// - the bound control's `aria-pressed` and label text.
pub fn apply(theme: Theme, policy: LabelPolicy) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute(DATA_THEME_ATTR, theme.as_str());
            let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
        if let Some(body) = document.body() {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
            let _ = body.class_list().toggle_with_force(LIGHT_CLASS, !theme.is_dark());
        }
        if let Some(toggle) = control::find_toggle() {
            let pressed = if theme.is_dark() { "true" } else { "false" };
            let _ = toggle.set_attribute("aria-pressed", pressed);
            update_label(&toggle, theme, policy);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (theme, policy);
    }
}

/// Update the control's human-readable label.
///
/// The text goes to the control's dedicated label element when it has one.
/// Without one, the control's own text content is replaced — but only when
/// the control has no element children, so icon markup is never clobbered.
#[cfg(feature = "hydrate")]
fn update_label(toggle: &web_sys::Element, theme: Theme, policy: LabelPolicy) {
    let text = label::toggle_label(theme, policy);
    if let Ok(Some(label_el)) = toggle.query_selector(LABEL_SELECTOR) {
        label_el.set_text_content(Some(text));
    } else if toggle.child_element_count() == 0 {
        toggle.set_text_content(Some(text));
    }
}

/// Drop the `no-js` marker from the root element, signalling to CSS that
/// scripted theming is active. Called once at mount.
pub fn clear_no_js() {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.class_list().remove_1(NO_JS_CLASS);
        }
    }
}
