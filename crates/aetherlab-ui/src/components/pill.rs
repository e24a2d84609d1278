//! Filter Pills Component
//!
//! Horizontal radio group that switches the work grid between categories.

use aetherlab_core::WorkFilter;
use dioxus::prelude::*;
use tracing::debug;

/// CSS class for a pill in the given selection state.
pub fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub selected: WorkFilter,
    pub on_select: EventHandler<WorkFilter>,
    #[props(default = "Filter projects".to_string())]
    pub aria_label: String,
}

/// Row of pills, one per [`WorkFilter`]
///
/// ```rust,ignore
/// let mut filter = use_signal(WorkFilter::default);
///
/// rsx! {
///     FilterPills { selected: filter(), on_select: move |f| filter.set(f) }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for filter in WorkFilter::ALL {
                {
                    let is_selected = props.selected == filter;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{filter.label()}",
                            class: pill_class(is_selected),
                            r#type: "button",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            "data-cursor": "hover",
                            onclick: move |_| {
                                debug!(filter = ?filter, "Work filter selected");
                                on_select.call(filter);
                            },
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}
