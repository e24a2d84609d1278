//! Background starfield.
//!
//! Stars are absolutely positioned dots; CSS keyframes handle the twinkle
//! using each star's phase and speed. The whole layer drifts a few pixels
//! against the pointer.

use aetherlab_core::starfield::{self, pointer_offset, Star};
use aetherlab_core::{Point, Viewport};
use dioxus::prelude::*;
use tracing::debug;

use crate::context::use_layout;

/// Inline style for one star.
fn star_style(star: &Star, reduced: bool) -> String {
    let rest = star.alpha(0, reduced) / 255.0;
    let low = (star.base_brightness - 55.0).max(0.0) / 255.0;
    let high = (star.base_brightness + 55.0).min(255.0) / 255.0;
    let period = star.twinkle_period();
    // Negative delay starts every star at its own point in the cycle
    let delay = -(star.phase / std::f64::consts::TAU) * period;
    format!(
        "left: {:.1}px; top: {:.1}px; width: {:.2}px; height: {:.2}px; opacity: {rest:.3}; \
         --alpha-low: {low:.3}; --alpha-high: {high:.3}; \
         animation-duration: {period:.2}s; animation-delay: {delay:.2}s;",
        star.x, star.y, star.size, star.size
    )
}

#[component]
pub fn Starfield() -> Element {
    let layout = use_layout();
    let field = use_memo(move || {
        let viewport = (layout.viewport)();
        let field = starfield::Starfield::generate(viewport, &mut rand::rng());
        debug!(stars = field.len(), "Starfield generated");
        field
    });

    let viewport = (layout.viewport)();
    let cursor = layout.cursor.read();
    let pointer = (cursor.active_variant(false) != aetherlab_core::CursorVariant::Hidden)
        .then(|| Point::new(cursor.x, cursor.y));
    drop(cursor);

    let (dx, dy) = if layout.reduced() {
        (0.0, 0.0)
    } else {
        pointer_offset(pointer, viewport)
    };

    rsx! {
        div {
            class: "starfield",
            "aria-hidden": "true",
            style: "transform: translate3d({dx:.2}px, {dy:.2}px, 0);",
            StarLayer { field, viewport }
        }
    }
}

/// The stars themselves. Only re-renders when the field is regenerated or
/// motion preferences change, not on every pointer move.
#[component]
fn StarLayer(field: Memo<starfield::Starfield>, viewport: Viewport) -> Element {
    let layout = use_layout();
    let reduced = layout.reduced();
    let field = field.read();

    rsx! {
        div {
            class: if reduced { "star-layer still" } else { "star-layer" },
            style: "width: {viewport.width}px; height: {viewport.height}px;",
            for (index, star) in field.stars().iter().enumerate() {
                span { key: "{index}", class: "star", style: star_style(star, reduced) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_style_positions_and_bounds_alpha() {
        let star = Star {
            x: 12.0,
            y: 40.5,
            size: 1.5,
            base_brightness: 230.0,
            phase: 0.0,
            twinkle_speed: 1.0,
        };
        let style = star_style(&star, true);
        assert!(style.starts_with("left: 12.0px; top: 40.5px;"));
        assert!(style.contains("--alpha-high: 1.000;"));
        assert!(style.contains("animation-delay: -0.00s;") || style.contains("animation-delay: 0.00s;"));
    }
}
