//! Work index: filter pills over the project grid.

use aetherlab_core::work::filter_projects;
use aetherlab_core::WorkFilter;
use aetherlab_ui::FilterPills;
use dioxus::prelude::*;

use crate::components::{HeroSection, WorkCard};

#[component]
pub fn WorkIndex() -> Element {
    let mut filter = use_signal(WorkFilter::default);
    let projects = use_memo(move || filter_projects(filter()));

    rsx! {
        div { class: "page work-page",
            HeroSection {
                eyebrow: "Selected work".to_string(),
                title: "Interfaces, systems and prototypes in motion".to_string(),
                lede: "A cross-section of recent engagements. Filter by the kind of work you need.".to_string(),
            }
            FilterPills {
                selected: filter(),
                on_select: move |next| filter.set(next),
                aria_label: "Filter projects".to_string(),
            }
            div { class: "work-grid",
                for (index, project) in projects().into_iter().enumerate() {
                    WorkCard { key: "{project.id}", project, index: index as u32 }
                }
            }
            if projects.read().is_empty() {
                p { class: "work-empty", "Nothing in this category yet." }
            }
        }
    }
}
