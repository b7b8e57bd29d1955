//! Shared string constants: the storage key, presentation markers, control
//! discovery selectors, and label text.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the explicit user choice.
pub const STORAGE_KEY: &str = "theme";

// ── Presentation surface ────────────────────────────────────────

/// Attribute set on the root element; style rules key off its value.
pub const DATA_THEME_ATTR: &str = "data-theme";

/// Boolean class mirroring the dark state for presence-keyed consumers.
pub const DARK_CLASS: &str = "dark";

/// `<body>` counterpart class carried while the light theme is active.
pub const LIGHT_CLASS: &str = "light";

/// Marker class removed from the root element once this code has run.
pub const NO_JS_CLASS: &str = "no-js";

// ── System preference ───────────────────────────────────────────

/// Media query observed for the OS-level dark preference.
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Toggle control discovery ────────────────────────────────────

/// Candidate selectors for the bound toggle control, tried in order.
/// The first match wins; at most one control is ever bound.
pub const TOGGLE_SELECTORS: [&str; 4] = [
    "[data-toggle-theme]",
    ".js-toggle-theme",
    ".mode-toggle button",
    ".toggle-button",
];

/// Selector for the control's dedicated inner label element.
pub const LABEL_SELECTOR: &str = "[data-theme-label]";

// ── Control labels ──────────────────────────────────────────────

/// Next-action label shown while the light theme is applied.
pub const SWITCH_TO_DARK_LABEL: &str = "Switch to dark mode";

/// Next-action label shown while the dark theme is applied.
pub const SWITCH_TO_LIGHT_LABEL: &str = "Switch to light mode";

/// Current-state label for the dark theme.
pub const DARK_MODE_LABEL: &str = "Dark mode";

/// Current-state label for the light theme.
pub const LIGHT_MODE_LABEL: &str = "Light mode";
