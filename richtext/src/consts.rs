//! Shared constants for the richtext crate.

// ── Font sizes ──────────────────────────────────────────────────

/// Smallest font-size step offered by the toolbar.
pub const MIN_FONT_SIZE: u8 = 1;

/// Largest font-size step offered by the toolbar.
pub const MAX_FONT_SIZE: u8 = 7;

/// Step used for body text when no explicit size is set.
pub const DEFAULT_FONT_SIZE: u8 = 3;

/// CSS keyword for each font-size step, indexed by `step - 1`.
pub const FONT_SIZE_KEYWORDS: [&str; 7] = [
    "x-small",
    "small",
    "medium",
    "large",
    "x-large",
    "xx-large",
    "xxx-large",
];

// ── Links ───────────────────────────────────────────────────────

/// URL schemes that are never accepted as link targets.
pub const BLOCKED_LINK_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];
