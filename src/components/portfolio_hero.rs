//! Home page hero: headline, calls to action and a parallax tile cluster.

use std::rc::Rc;

use aetherlab_core::parallax::{tile_depth, tile_transform, HERO_TILE_DEPTHS};
use aetherlab_core::{Bounds, MotionPreset, NavTarget, Parallax, Point};
use aetherlab_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::use_layout;
use crate::hooks::client_bounds;

const TILES: [(&str, &str); 4] = [
    ("Kinetic UI", "Interfaces that explain themselves in motion"),
    ("Motion Systems", "Tokens, curves and choreography at scale"),
    ("Prototyping", "Physics-ready specs before the first sprint"),
    ("Spatial", "Depth cues for XR and mixed-crew tools"),
];

#[component]
pub fn PortfolioHero() -> Element {
    let layout = use_layout();
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let mut bounds = use_signal(|| None::<Bounds>);
    let mut offset = use_signal(|| (0.0, 0.0));
    let mut shown = use_signal(|| false);
    use_effect(move || shown.set(true));

    let reduced = layout.reduced();
    let parallax = Parallax::hero();

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

    let item_style =
        move |index: u32| MotionPreset::HeroItem.staggered_style(shown(), reduced, index, 90);

    let current = offset();

    rsx! {
        section {
            id: "work",
            class: "portfolio-hero",
            onmounted: move |evt: MountedEvent| element.set(Some(evt.data())),
            onmouseenter: measure,
            onmousemove: track,
            onmouseleave: move |_| offset.set((0.0, 0.0)),
            div { class: "hero-copy",
                p { class: "hero-eyebrow", style: item_style(0), "AetherLab \u{00B7} Motion-led product studio" }
                h1 { class: "hero-title", style: item_style(1),
                    "We choreograph interfaces that feel inevitable."
                }
                p { class: "hero-lede", style: item_style(2),
                    "Product UI, motion systems and prototypes for teams shipping tools that move."
                }
                div { class: "hero-actions", style: item_style(3),
                    Button { onclick: move |_| layout.navigate(NavTarget::Work), "View work" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| layout.open_contact(),
                        "Start a project"
                    }
                }
            }
            div { class: "hero-tiles", "aria-hidden": "true",
                for (index, (title, caption)) in TILES.into_iter().enumerate() {
                    div {
                        key: "{title}",
                        class: "hero-tile",
                        style: tile_transform(current, tile_depth(&HERO_TILE_DEPTHS, index)),
                        span { class: "hero-tile-title", "{title}" }
                        span { class: "hero-tile-caption", "{caption}" }
                    }
                }
            }
        }
    }
}
