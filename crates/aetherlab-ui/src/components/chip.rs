//! Chips: small label/value tiles used for outcomes, motion tokens and tags.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct MetricChipProps {
    pub label: String,
    pub value: String,
}

#[component]
pub fn MetricChip(props: MetricChipProps) -> Element {
    rsx! {
        div { class: "metric-chip",
            span { class: "metric-label", "{props.label}" }
            span { class: "metric-value", "{props.value}" }
        }
    }
}

/// Plain tag list
#[component]
pub fn TagList(tags: Vec<String>) -> Element {
    rsx! {
        ul { class: "tag-list",
            for tag in tags {
                li { key: "{tag}", class: "tag", "{tag}" }
            }
        }
    }
}
