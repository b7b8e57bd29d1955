//! Mount entry point, the owned state cell, and the page-lifetime
//! subscriptions.
//!
//! DESIGN
//! ======
//! The currently applied theme is process-wide state observed by several
//! independent handlers, so it lives in a single `thread_local!` cell (the
//! browser main thread is the only thread) that is updated through one
//! dispatch path. Each trigger runs a pure
//! [`ThemeCore`](crate::state::core::ThemeCore) transition and the resulting
//! [`Action`](crate::state::core::Action) is executed here; handlers never
//! mutate the document directly.
//!
//! Three subscriptions are registered at mount — toggle activation, system
//! preference change, cross-tab storage change. This system has no teardown
//! phase, so each closure is leaked with `Closure::forget` and lives for the
//! rest of the page.

use crate::state::label::LabelPolicy;
use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
use std::cell::Cell;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use crate::consts::{DARK_MEDIA_QUERY, STORAGE_KEY};
#[cfg(feature = "hydrate")]
use crate::dom::{control, media, storage, surface};
#[cfg(feature = "hydrate")]
use crate::state::core::{Action, ThemeCore};

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct Mounted {
    core: ThemeCore,
    policy: LabelPolicy,
    /// Whether a toggle control has been discovered and bound.
    bound: bool,
}

#[cfg(feature = "hydrate")]
thread_local! {
    /// The single owned state cell; `None` until `mount` has run.
    static MOUNTED: Cell<Option<Mounted>> = const { Cell::new(None) };
}

/// Mount with the default label policy. See [`mount_with`].
pub fn mount() {
    mount_with(LabelPolicy::default());
}

/// Resolve and render the initial theme, then subscribe to the three change
/// triggers. On the server this is a no-op.
///
/// Idempotent: the first call wins and later calls keep its state and
/// policy, so a host page and an embedded
/// [`ThemeToggle`](crate::components::theme_toggle::ThemeToggle) control may
/// both mount. The one thing a later call may still do is bind a toggle
/// control that did not exist yet at first mount.
pub fn mount_with(policy: LabelPolicy) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(mut mounted) = MOUNTED.with(Cell::get) {
            if !mounted.bound && listen_toggle() {
                mounted.bound = true;
                MOUNTED.with(|cell| cell.set(Some(mounted)));
                // First paint for the late-bound control's pressed state and label.
                run(
                    Action::Apply { theme: mounted.core.applied(), persist: false },
                    mounted.policy,
                );
            }
            return;
        }
        surface::clear_no_js();
        let stored = storage::read();
        let system_dark = media::prefers_dark();
        let (core, action) = ThemeCore::boot(stored.as_deref(), system_dark);
        log::debug!("theme mounted: stored={stored:?} system_dark={system_dark}");
        let bound = listen_toggle();
        MOUNTED.with(|cell| cell.set(Some(Mounted { core, policy, bound })));
        run(action, policy);
        listen_system();
        listen_storage();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = policy;
    }
}

/// Programmatic equivalent of activating the toggle control: inverts, pins,
/// and persists. Returns the newly applied theme, or `None` before `mount`
/// (and always on the server).
pub fn toggle() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(ThemeCore::on_toggle)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The theme currently rendered, or `None` before `mount` (and always on
/// the server).
#[must_use]
pub fn applied() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        MOUNTED.with(Cell::get).map(|m| m.core.applied())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Run one pure transition against the state cell and execute its action.
/// Returns the applied theme afterwards, or `None` when not mounted.
#[cfg(feature = "hydrate")]
fn dispatch(transition: impl FnOnce(&mut ThemeCore) -> Action) -> Option<Theme> {
    MOUNTED.with(|cell| {
        let mut mounted = cell.get()?;
        let action = transition(&mut mounted.core);
        cell.set(Some(mounted));
        run(action, mounted.policy);
        Some(mounted.core.applied())
    })
}

/// Execute an [`Action`]: render, and persist only when the transition said
/// the value represents an explicit user choice.
#[cfg(feature = "hydrate")]
fn run(action: Action, policy: LabelPolicy) {
    if let Action::Apply { theme, persist } = action {
        log::debug!("applying theme {} (persist={persist})", theme.as_str());
        surface::apply(theme, policy);
        if persist {
            storage::write(theme);
        }
    }
}

/// Subscribe to activation of the bound control, returning whether one was
/// found. `click` fires for pointer activation and for keyboard activation
/// of a button. Pages without a control simply get no subscription.
#[cfg(feature = "hydrate")]
fn listen_toggle() -> bool {
    let Some(toggle) = control::find_toggle() else {
        return false;
    };
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let _ = dispatch(ThemeCore::on_toggle);
    });
    let _ = toggle.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
    true
}

/// Subscribe to OS preference changes. The event's own `matches()` carries
/// the new state. Skipped entirely when the media-query API is missing.
#[cfg(feature = "hydrate")]
fn listen_system() {
    let mql = web_sys::window().and_then(|w| w.match_media(DARK_MEDIA_QUERY).ok().flatten());
    let Some(mql) = mql else {
        return;
    };
    let cb = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            let _ = dispatch(|core| core.on_system_change(event.matches()));
        },
    );
    let _ = mql.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Subscribe to cross-tab writes. The browser only delivers `storage` events
/// for writes made by other tabs, so this tab never reacts to its own
/// persistence.
#[cfg(feature = "hydrate")]
fn listen_storage() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |event: web_sys::StorageEvent| {
            if event.key().as_deref() != Some(STORAGE_KEY) {
                return;
            }
            let value = event.new_value();
            let _ = dispatch(|core| core.on_storage_change(value.as_deref()));
        },
    );
    let _ = window.add_event_listener_with_callback("storage", cb.as_ref().unchecked_ref());
    cb.forget();
}
