//! `/contact` renders the home page; the layout keeps the drawer open
//! for as long as this route is active.

use dioxus::prelude::*;

use super::Home;

#[component]
pub fn Contact() -> Element {
    rsx! { Home {} }
}
