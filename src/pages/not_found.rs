use dioxus::prelude::*;
use tracing::debug;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "No route matched");

    rsx! {
        div { class: "page not-found",
            span { class: "badge", "404" }
            h1 { class: "page-title", "Page not found" }
            p { class: "page-lede",
                "The page you were seeking drifted outside our constellation. Return to the hub to keep exploring."
            }
            span { "data-cursor": "hover",
                Link { class: "btn-ghost", to: Route::Home {}, "Back to home" }
            }
        }
    }
}
