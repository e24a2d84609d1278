//! Motion score: the token chips of a case study plus a live preview of the
//! curve they describe.

use aetherlab_core::cases::MotionTokens;
use aetherlab_ui::{Button, ButtonVariant, MetricChip};
use dioxus::prelude::*;

use crate::context::use_layout;

/// Inline style for the preview dot at either end of its travel.
fn preview_style(tokens: &MotionTokens, travelled: bool, reduced: bool) -> String {
    let distance = if travelled { tokens.distance_px() } else { 0.0 };
    let duration = if reduced { 0.0 } else { tokens.duration_ms().max(0.0) };
    format!(
        "transform: translateX({:.0}px); transition: transform {:.0}ms {};",
        distance,
        duration,
        tokens.easing()
    )
}

#[component]
pub fn MotionScore(tokens: MotionTokens) -> Element {
    let layout = use_layout();
    let mut travelled = use_signal(|| false);

    let style = preview_style(&tokens, travelled(), layout.reduced());
    let chips = tokens.chips();

    rsx! {
        section { class: "motion-score", "aria-label": "Motion score",
            h2 { class: "section-title", "Motion score" }
            div { class: "chip-row",
                for chip in chips {
                    MetricChip { key: "{chip.label}", label: chip.label.clone(), value: chip.value.clone() }
                }
            }
            p { class: "motion-notes", "{tokens.notes()}" }
            div { class: "motion-preview",
                div { class: "motion-rail",
                    span { class: "motion-dot", style: "{style}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| travelled.toggle(),
                    if travelled() { "Reset" } else { "Play curve" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> MotionTokens {
        MotionTokens {
            duration_ms: 320.0,
            easing: "easeOut".to_string(),
            distance_px: 48.0,
            notes: None,
            extras: Vec::new(),
        }
    }

    #[test]
    fn preview_travels_with_token_curve() {
        let style = preview_style(&tokens(), true, false);
        assert!(style.starts_with("transform: translateX(48px);"));
        assert!(style.contains("320ms cubic-bezier(0, 0, 0.58, 1)"));
    }

    #[test]
    fn reduced_preview_jumps() {
        let style = preview_style(&tokens(), false, true);
        assert!(style.contains("translateX(0px)"));
        assert!(style.contains("transform 0ms"));
    }
}
