//! Guarded access to the persisted theme entry in `localStorage`.
//!
//! The entry is shared by every same-origin tab; the `storage` event is the
//! only cross-tab coordination, and last write wins.

#[cfg(feature = "hydrate")]
use crate::consts::STORAGE_KEY;
use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw stored value. Absence of the API, a security exception, or a
/// missing entry all read as `None`; validation is the caller's concern.
#[must_use]
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist an explicit user choice. A missing API or a quota/security
/// exception turns the write into a no-op.
pub fn write(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
