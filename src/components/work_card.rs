//! Project card for the work index grid.

use std::rc::Rc;

use aetherlab_core::parallax::{tilt, tilt_transform};
use aetherlab_core::{Bounds, MotionPreset, Point, WorkProject};
use aetherlab_ui::TagList;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_layout;
use crate::hooks::client_bounds;

#[component]
pub fn WorkCard(project: &'static WorkProject, index: u32) -> Element {
    let layout = use_layout();
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let mut bounds = use_signal(|| None::<Bounds>);
    let mut angle = use_signal(|| (0.0, 0.0));
    let mut shown = use_signal(|| false);
    use_effect(move || shown.set(true));

    let reduced = layout.reduced();
    let enter_style = MotionPreset::Card(index).style(shown(), reduced);
    let tilt_style = tilt_transform(angle());

    let measure = move |_: MouseEvent| {
        if let Some(element) = element.peek().clone() {
            spawn(async move {
                bounds.set(client_bounds(&element).await);
            });
        }
    };

    let track = move |evt: MouseEvent| {
        if reduced {
            return;
        }
        let Some(area) = *bounds.peek() else { return };
        let point = evt.client_coordinates();
        angle.set(tilt(Point::new(point.x, point.y), area));
    };

    let tags: Vec<String> = project.tags.iter().map(|tag| tag.to_string()).collect();

    rsx! {
        article { class: "work-card", style: "{enter_style}",
            div {
                class: "work-card-inner",
                style: "{tilt_style}",
                onmounted: move |evt: MountedEvent| element.set(Some(evt.data())),
                onmouseenter: measure,
                onmousemove: track,
                onmouseleave: move |_| angle.set((0.0, 0.0)),
                Link {
                    class: "work-card-link",
                    to: Route::CaseStudyView { slug: project.id.to_string() },
                    div { class: "work-card-media",
                        img { src: "{project.poster}", alt: "", loading: "lazy" }
                    }
                    div { class: "work-card-body",
                        p { class: "work-card-meta", "{project.year} \u{00B7} {project.role}" }
                        h3 { class: "work-card-title", "{project.title}" }
                        p { class: "work-card-summary", "{project.summary}" }
                        TagList { tags }
                    }
                }
            }
        }
    }
}
