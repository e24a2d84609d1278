//! Theme: palette, motion tokens as CSS variables, and the global stylesheet.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

use aetherlab_core::motion::durations;
use aetherlab_core::starfield::STAR_RGB;
use aetherlab_core::Easing;

/// `:root` block with the palette and the motion table, so CSS transitions
/// share the exact curves the Rust side uses.
pub fn root_variables() -> String {
    let mut vars: Vec<String> = colors::PALETTE
        .iter()
        .map(|(name, value)| format!("  {name}: {value};"))
        .collect();

    let (r, g, b) = STAR_RGB;
    vars.push(format!("  --star: rgb({r}, {g}, {b});"));

    for (name, ms) in [
        ("--d-120", durations::D120),
        ("--d-160", durations::D160),
        ("--d-180", durations::D180),
        ("--d-240", durations::D240),
        ("--d-320", durations::D320),
        ("--d-400", durations::D400),
        ("--t-in-duration", durations::TRANSITION_IN),
        ("--t-out-duration", durations::TRANSITION_OUT),
        ("--t-snap-duration", durations::TRANSITION_SNAP),
    ] {
        vars.push(format!("  {name}: {ms}ms;"));
    }

    for (name, easing) in [
        ("--ease-t-in", Easing::T_IN),
        ("--ease-t-out", Easing::T_OUT),
        ("--ease-t-snap", Easing::T_SNAP),
        ("--ease-calm", Easing::CALM),
        ("--ease-calm-in-out", Easing::CALM_IN_OUT),
        ("--ease-standard", Easing::STANDARD),
    ] {
        vars.push(format!("  {name}: {easing};"));
    }

    format!(":root {{\n{}\n}}", vars.join("\n"))
}
