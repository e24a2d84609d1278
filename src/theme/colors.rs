//! Color constants for the AetherLab palette.

// === INK (Backgrounds) ===
pub const INK: &str = "#05040a";
pub const INK_RAISED: &str = "#0d0b18";
pub const INK_BORDER: &str = "rgba(198, 183, 255, 0.14)";

// === LAVENDER (Accent, Focus) ===
pub const LAVENDER: &str = "#c6b7ff";
pub const LAVENDER_GLOW: &str = "rgba(198, 183, 255, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f4f1ff";
pub const TEXT_SECONDARY: &str = "rgba(244, 241, 255, 0.72)";
pub const TEXT_MUTED: &str = "rgba(244, 241, 255, 0.48)";

// === SEMANTIC ===
pub const WARNING: &str = "#ffb86b";
pub const SUCCESS: &str = "#7fe0c2";

/// Every palette entry as a CSS custom property name and value
pub const PALETTE: [(&str, &str); 10] = [
    ("--ink", INK),
    ("--ink-raised", INK_RAISED),
    ("--ink-border", INK_BORDER),
    ("--lavender", LAVENDER),
    ("--lavender-glow", LAVENDER_GLOW),
    ("--text-primary", TEXT_PRIMARY),
    ("--text-secondary", TEXT_SECONDARY),
    ("--text-muted", TEXT_MUTED),
    ("--warning", WARNING),
    ("--success", SUCCESS),
];
