//! The OS-level dark preference, observed through a media query.

#[cfg(feature = "hydrate")]
use crate::consts::DARK_MEDIA_QUERY;

/// Whether the system currently prefers dark. `false` when the media-query
/// API is unavailable, so hosts without it fall back to the light default.
#[must_use]
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_MEDIA_QUERY).ok().flatten())
            .map_or(false, |mql| mql.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
