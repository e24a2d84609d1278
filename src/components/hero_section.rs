//! Page header used by the inner pages.

use aetherlab_core::MotionPreset;
use dioxus::prelude::*;

use crate::context::use_layout;

#[derive(Clone, PartialEq, Props)]
pub struct HeroSectionProps {
    pub eyebrow: String,
    pub title: String,
    #[props(default)]
    pub lede: Option<String>,
}

/// Eyebrow, title and lede that rise in one after another on first paint.
#[component]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let layout = use_layout();
    let mut shown = use_signal(|| false);
    use_effect(move || shown.set(true));

    let reduced = layout.reduced();
    let item = move |index: u32| MotionPreset::HeroItem.staggered_style(shown(), reduced, index, 80);

    rsx! {
        header { class: "page-hero",
            p { class: "page-eyebrow", style: item(0), "{props.eyebrow}" }
            h1 { class: "page-title", style: item(1), "{props.title}" }
            if let Some(lede) = &props.lede {
                p { class: "page-lede", style: item(2), "{lede}" }
            }
        }
    }
}
