use aetherlab_core::CaseError;
use dioxus::prelude::*;

use crate::app::route_for;

/// Shown in place of a case study that could not be resolved.
#[component]
pub fn EmptyState(error: CaseError) -> Element {
    rsx! {
        section { class: "empty-state", role: "alert",
            p { class: "empty-eyebrow", "Case study" }
            h1 { class: "empty-heading", "{error.heading()}" }
            p { class: "empty-description", "{error.description()}" }
            span { "data-cursor": "hover",
                Link { class: "btn-primary", to: route_for(error.action_path()), "{error.action_label()}" }
            }
        }
    }
}
