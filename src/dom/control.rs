//! Discovery of the page's toggle control.

#[cfg(feature = "hydrate")]
use crate::consts::TOGGLE_SELECTORS;

/// Find the bound toggle control, if the page has one.
///
/// The candidate selectors are tried in their fixed order and the first match
/// wins, so at most one control is ever bound. A page without a recognizable
/// control is fine; callers skip control-specific updates.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn find_toggle() -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    TOGGLE_SELECTORS
        .iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())
}
