//! The two-valued theme and the resolution precedence rule.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// One of the two mutually exclusive presentation modes.
///
/// The serialized form is the literal string written to storage and to the
/// root `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The default when neither a stored choice nor the system signal says dark.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl Theme {
    /// Parse a persisted value. Anything but the two literal strings counts
    /// as absent.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The literal string persisted to storage and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme; what an explicit toggle switches to.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The theme implied by the system preference signal.
    #[must_use]
    pub fn from_system(system_dark: bool) -> Self {
        if system_dark { Self::Dark } else { Self::Light }
    }
}

/// Effective theme precedence: a valid stored choice always wins; otherwise
/// follow the system signal.
#[must_use]
pub fn resolve(stored: Option<Theme>, system_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_system(system_dark))
}
