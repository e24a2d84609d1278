//! Home page: hero, approach and the lab board.
//!
//! The scroll spy follows the three sections and feeds the active one into the
//! overlay coordinator so the nav bar can highlight it.

use std::rc::Rc;

use aetherlab_core::parallax::{tile_depth, tile_transform, BOARD_TILE_DEPTHS};
use aetherlab_core::{Bounds, MotionPreset, Parallax, Point};
use dioxus::prelude::*;

use crate::components::PortfolioHero;
use crate::context::use_layout;
use crate::hooks::{client_bounds, use_scroll_spy};

const SECTIONS: &[&str] = &["work", "approach", "lab"];

const CAPABILITIES: [(&str, &str); 3] = [
    (
        "Interface systems",
        "Design languages and adaptive component libraries that hold their rhythm across products and platforms.",
    ),
    (
        "Motion strategy",
        "Precision-tuned animations that communicate intent and keep attention anchored without theatrics.",
    ),
    (
        "Prototype labs",
        "High-fidelity sandboxes that let teams feel interactions before they commit to a roadmap.",
    ),
];

const PRACTICE: [&str; 3] = [
    "Research sprints, brand tune-ups, motion guidelines",
    "Prototype rigs, developer handoff, performance audits",
    "Embedded collaborations from seed to scale",
];

/// Lab board entries: (name, description, year)
const INVESTIGATIONS: [(&str, &str, &str); 3] = [
    (
        "Nebula Control",
        "Motion-led command center for a climate intelligence platform, blending orbit telemetry with city-scale data.",
        "2024",
    ),
    (
        "Pulse Array",
        "Responsive audio diagnostics for an adaptive headset lineup, aligning sensors, gestures and voice cues.",
        "2023",
    ),
    (
        "Orion Index",
        "Investing surface where complex models become legible through layered depth and guided focus.",
        "2022",
    ),
];

#[component]
pub fn Home() -> Element {
    let layout = use_layout();
    let active = use_scroll_spy(SECTIONS);

    use_effect(move || layout.set_active_section(active()));
    use_drop(move || layout.set_active_section(None));

    let mut shown = use_signal(|| false);
    use_effect(move || shown.set(true));
    let reduced = layout.reduced();

    rsx! {
        div { class: "home",
            PortfolioHero {}

            section { id: "approach", class: "home-section approach",
                div { class: "approach-panel", style: MotionPreset::HeroItem.style(shown(), reduced),
                    h2 { class: "section-title", "How we modulate momentum" }
                    p { class: "section-lede",
                        "Every engagement starts with a motion score: a map of how light, depth and time should behave across product touchpoints. We codify it into accessible systems your teams can ship without guesswork."
                    }
                    ul { class: "practice-list",
                        for line in PRACTICE {
                            li { key: "{line}", span { class: "practice-dot" } "{line}" }
                        }
                    }
                }
                div { class: "capability-grid",
                    for (index, (title, copy)) in CAPABILITIES.into_iter().enumerate() {
                        div {
                            key: "{title}",
                            class: "capability-card",
                            style: MotionPreset::Card(index as u32).style(shown(), reduced),
                            h3 { "{title}" }
                            p { "{copy}" }
                        }
                    }
                }
            }

            LabBoard {}
        }
    }
}

/// "Selected investigations" with a pointer parallax across the cards.
#[component]
fn LabBoard() -> Element {
    let layout = use_layout();
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let mut bounds = use_signal(|| None::<Bounds>);
    let mut offset = use_signal(|| (0.0, 0.0));
    let reduced = layout.reduced();
    let parallax = Parallax::board();

    let measure = move |_: MouseEvent| {
        if let Some(element) = element.peek().clone() {
            spawn(async move {
                bounds.set(client_bounds(&element).await);
            });
        }
    };

    let track = move |evt: MouseEvent| {
        let Some(area) = *bounds.peek() else { return };
        let point = evt.client_coordinates();
        offset.set(parallax.offset(Point::new(point.x, point.y), area, reduced));
    };

    let current = offset();

    rsx! {
        section {
            id: "lab",
            class: "home-section lab",
            onmounted: move |evt: MountedEvent| element.set(Some(evt.data())),
            onmouseenter: measure,
            onmousemove: track,
            onmouseleave: move |_| offset.set((0.0, 0.0)),
            div { class: "lab-heading",
                p { class: "section-eyebrow", "Case signals" }
                h2 { class: "section-title", "Selected investigations" }
            }
            div { class: "lab-board",
                for (index, (name, description, year)) in INVESTIGATIONS.into_iter().enumerate() {
                    article {
                        key: "{name}",
                        class: "lab-card",
                        style: tile_transform(current, tile_depth(&BOARD_TILE_DEPTHS, index)),
                        div { class: "lab-card-header",
                            h3 { "{name}" }
                            span { class: "lab-card-year", "{year}" }
                        }
                        p { "{description}" }
                        span { class: "lab-card-cta", "Inquire for release notes" }
                    }
                }
            }
        }
    }
}
