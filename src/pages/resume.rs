//! Résumé page.
//!
//! The experience timeline is a stack of disclosure panels with the latest
//! role expanded. "Download PDF" hands the page to the print dialog, where a
//! print stylesheet flattens it to black on white.

use aetherlab_core::MotionPreset;
use aetherlab_ui::{Button, ButtonVariant, TagList};
use dioxus::prelude::*;
use tracing::info;

use crate::components::HeroSection;
use crate::context::use_layout;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    highlights: [&'static str; 2],
}

const EXPERIENCE: [Role; 3] = [
    Role {
        title: "Principal Motion Designer",
        company: "Lumen Systems",
        period: "2022 - Present",
        highlights: [
            "Scaled a motion design system across six product lines with shared timing tokens and performance budgets.",
            "Built a real-time QA rig with engineering, reducing interaction regressions by 34%.",
        ],
    },
    Role {
        title: "Senior Product Designer",
        company: "Atlas Labs",
        period: "2019 - 2022",
        highlights: [
            "Led interface prototyping for AR and desktop surfaces with motion-led onboarding.",
            "Delivered developer-spec tooling that cut handoff friction across distributed teams.",
        ],
    },
    Role {
        title: "Interaction Designer",
        company: "Forge Collective",
        period: "2016 - 2019",
        highlights: [
            "Designed experimental interfaces for automotive clusters, museum installations and broadcast graphics.",
            "Set up motion language foundations adopted by partner agencies across Europe and APAC.",
        ],
    },
];

const EMAIL: &str = "hello@aetherlab.studio";
const INTRO_CALL_URL: &str = "https://cal.com/aetherlab/intro";

fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// Only the most recent role starts expanded
fn expanded_by_default(index: usize) -> bool {
    index == 0
}

fn print_page() {
    info!("Opening print dialog");
    let _ = document::eval("window.print();");
}

const SKILLS: [&str; 6] = [
    "Motion systems",
    "Design engineering",
    "Rapid prototyping",
    "Accessibility auditing",
    "Workshop facilitation",
    "Narrative decks",
];

const TOOLS: [&str; 8] = [
    "After Effects",
    "Figma",
    "Spline",
    "TouchDesigner",
    "React",
    "TypeScript",
    "Framer",
    "GSAP",
];

const RECOGNITION: [(&str, &str); 3] = [
    ("IxDA Awards", "Shortlist, Responsive Environments (2023)"),
    ("Webby", "Nominee, Experimental & Innovation (2022)"),
    ("Creative Review", "Featured, Motion Systems for Product (2021)"),
];

#[component]
pub fn Resume() -> Element {
    let layout = use_layout();
    let mut shown = use_signal(|| false);
    use_effect(move || shown.set(true));

    let reduced = layout.reduced();
    let card = move |index: usize| MotionPreset::Card(index as u32).style(shown(), reduced);
    let tail = EXPERIENCE.len();

    rsx! {
        div { class: "page resume-page",
            HeroSection {
                eyebrow: "R\u{00E9}sum\u{00E9}".to_string(),
                title: "Experience and skills tuned for momentum".to_string(),
                lede: "Recent trajectory, along with the skills and tools that keep engagements moving.".to_string(),
            }
            div { class: "resume-actions",
                Button { onclick: move |_| layout.open_contact(), "Hire me" }
                Button { variant: ButtonVariant::Ghost, onclick: move |_| print_page(), "Download PDF" }
                a { class: "btn-link", href: mailto(EMAIL), "data-cursor": "hover", "Email" }
                a { class: "btn-link", href: INTRO_CALL_URL, "data-cursor": "hover", "Book intro call" }
                span { class: "muted", "Portfolio and references on request." }
            }

            ol { class: "resume-roles resume-timeline",
                for (index, role) in EXPERIENCE.iter().enumerate() {
                    li { key: "{role.title}", class: "panel resume-role", style: card(index),
                        details { open: expanded_by_default(index),
                            summary { class: "resume-role-header",
                                div {
                                    h2 { "{role.title}" }
                                    p { class: "resume-company", "{role.company}" }
                                }
                                span { class: "badge", "{role.period}" }
                            }
                            ul { class: "resume-highlights",
                                for highlight in role.highlights {
                                    li { key: "{highlight}", "{highlight}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "resume-columns",
                div { class: "panel", style: card(tail + 1),
                    h3 { "Core capabilities" }
                    ul { class: "practice-list",
                        for skill in SKILLS {
                            li { key: "{skill}", span { class: "practice-dot" } "{skill}" }
                        }
                    }
                }
                div { class: "panel", style: card(tail + 2),
                    h3 { "Tools in regular rotation" }
                    TagList { tags: TOOLS.iter().map(|tool| tool.to_string()).collect::<Vec<_>>() }
                }
            }

            section { class: "panel resume-recognition", style: card(tail + 3),
                h3 { "Recognition" }
                ul {
                    for (title, note) in RECOGNITION {
                        li { key: "{title}",
                            span { "{title}" }
                            span { class: "muted", "{note}" }
                        }
                    }
                }
            }
        }
    }
}
