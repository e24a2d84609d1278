//! About page.

use aetherlab_core::MotionPreset;
use aetherlab_ui::Button;
use dioxus::prelude::*;

use crate::components::HeroSection;
use crate::context::use_layout;

const PRINCIPLES: [&str; 4] = [
    "Translate complex systems into calm, legible interactions.",
    "Prototype in motion first; code is our sketchbook.",
    "Operate as embedded partners, not distant vendors.",
    "Measure delight by clarity: fewer steps, sharper focus.",
];

#[component]
pub fn About() -> Element {
    let layout = use_layout();
    let mut shown = use_signal(|| false);
    use_effect(move || shown.set(true));
    let reduced = layout.reduced();

    rsx! {
        div { class: "page about-page",
            HeroSection {
                eyebrow: "Studio".to_string(),
                title: "About AetherLab".to_string(),
                lede: "A compact team of interaction designers, prototypers and technical artists applying research-led motion thinking to digital products.".to_string(),
            }
            div { class: "about-grid",
                div { class: "panel", style: MotionPreset::Card(0).style(shown(), reduced),
                    h2 { "Lab principles" }
                    ul { class: "practice-list",
                        for principle in PRINCIPLES {
                            li { key: "{principle}", span { class: "practice-dot" } "{principle}" }
                        }
                    }
                }
                div { class: "panel", style: MotionPreset::Card(1).style(shown(), reduced),
                    h2 { "Open collaboration windows" }
                    p {
                        "We book 6-8 week interface labs quarterly. Share your challenge and we will respond with a tailored motion plan."
                    }
                    Button { onclick: move |_| layout.open_contact(), "Contact the lab" }
                }
            }
        }
    }
}
