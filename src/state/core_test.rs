use super::*;
use crate::state::theme::Theme;

// =============================================================
// Helpers
// =============================================================

/// A tab that loaded with no stored preference.
fn fresh(system_dark: bool) -> ThemeCore {
    let (core, _) = ThemeCore::boot(None, system_dark);
    core
}

// =============================================================
// Boot
// =============================================================

#[test]
fn boot_without_stored_value_follows_a_dark_system() {
    let (core, action) = ThemeCore::boot(None, true);
    assert_eq!(core.applied(), Theme::Dark);
    assert!(!core.pinned());
    assert_eq!(action, Action::Apply { theme: Theme::Dark, persist: false });
}

#[test]
fn boot_without_stored_value_defaults_to_light() {
    let (core, action) = ThemeCore::boot(None, false);
    assert_eq!(core.applied(), Theme::Light);
    assert!(!core.pinned());
    assert_eq!(action, Action::Apply { theme: Theme::Light, persist: false });
}

#[test]
fn boot_stored_value_beats_the_system_preference() {
    let (core, action) = ThemeCore::boot(Some("light"), true);
    assert_eq!(core.applied(), Theme::Light);
    assert!(core.pinned());
    assert_eq!(action, Action::Apply { theme: Theme::Light, persist: false });
}

#[test]
fn boot_malformed_stored_value_counts_as_absent() {
    for raw in ["", "auto", "Dark", "DARK", "0"] {
        let (core, _) = ThemeCore::boot(Some(raw), true);
        assert_eq!(core.applied(), Theme::Dark);
        assert!(!core.pinned(), "{raw:?} must not pin the state");
    }
}

#[test]
fn boot_never_persists() {
    for stored in [None, Some("light"), Some("dark"), Some("garbage")] {
        for system_dark in [false, true] {
            let (_, action) = ThemeCore::boot(stored, system_dark);
            let Action::Apply { persist, .. } = action else {
                panic!("boot must always apply a theme");
            };
            assert!(!persist);
        }
    }
}

// =============================================================
// Explicit toggle
// =============================================================

#[test]
fn toggle_applies_and_persists_the_inverse() {
    let mut core = fresh(false);
    let action = core.on_toggle();
    assert_eq!(action, Action::Apply { theme: Theme::Dark, persist: true });
    assert_eq!(core.applied(), Theme::Dark);
}

#[test]
fn toggle_pins_the_state() {
    let mut core = fresh(false);
    core.on_toggle();
    assert!(core.pinned());
}

#[test]
fn toggle_twice_round_trips() {
    for system_dark in [false, true] {
        let mut core = fresh(system_dark);
        let start = core.applied();
        core.on_toggle();
        let second = core.on_toggle();
        assert_eq!(core.applied(), start);
        assert_eq!(second, Action::Apply { theme: start, persist: true });
    }
}

// =============================================================
// System preference changes
// =============================================================

#[test]
fn system_change_is_followed_before_any_explicit_choice() {
    let mut core = fresh(false);
    let action = core.on_system_change(true);
    assert_eq!(action, Action::Apply { theme: Theme::Dark, persist: false });
    assert_eq!(core.applied(), Theme::Dark);
    assert!(!core.pinned());
}

#[test]
fn system_change_tracks_back_and_forth_while_following() {
    let mut core = fresh(false);
    core.on_system_change(true);
    core.on_system_change(false);
    assert_eq!(core.applied(), Theme::Light);
    assert!(!core.pinned());
}

#[test]
fn system_change_is_ignored_once_pinned_by_boot() {
    let (mut core, _) = ThemeCore::boot(Some("dark"), true);
    let action = core.on_system_change(false);
    assert_eq!(action, Action::None);
    assert_eq!(core.applied(), Theme::Dark);
}

#[test]
fn system_change_is_ignored_once_pinned_by_toggle() {
    let mut core = fresh(false);
    core.on_toggle();
    let action = core.on_system_change(false);
    assert_eq!(action, Action::None);
    assert_eq!(core.applied(), Theme::Dark);
}

// =============================================================
// Cross-tab storage changes
// =============================================================

#[test]
fn storage_change_applies_without_re_persisting() {
    let mut core = fresh(false);
    let action = core.on_storage_change(Some("dark"));
    assert_eq!(action, Action::Apply { theme: Theme::Dark, persist: false });
    assert_eq!(core.applied(), Theme::Dark);
}

#[test]
fn storage_change_pins_the_state() {
    let mut core = fresh(false);
    core.on_storage_change(Some("dark"));
    assert!(core.pinned());
    assert_eq!(core.on_system_change(false), Action::None);
}

#[test]
fn storage_change_with_invalid_value_is_ignored() {
    let mut core = fresh(true);
    for value in [None, Some(""), Some("blue"), Some("DARK")] {
        assert_eq!(core.on_storage_change(value), Action::None);
    }
    assert_eq!(core.applied(), Theme::Dark);
    assert!(!core.pinned());
}

#[test]
fn storage_change_overrides_a_local_toggle() {
    // Last write wins across tabs.
    let mut core = fresh(false);
    core.on_toggle();
    let action = core.on_storage_change(Some("light"));
    assert_eq!(action, Action::Apply { theme: Theme::Light, persist: false });
    assert_eq!(core.applied(), Theme::Light);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn reapplying_the_same_theme_requests_an_identical_action() {
    let mut core = fresh(true);
    let first = core.on_storage_change(Some("dark"));
    let second = core.on_storage_change(Some("dark"));
    assert_eq!(first, second);
    assert_eq!(core.applied(), Theme::Dark);
}
