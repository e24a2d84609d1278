//! Floating navigation bar.
//!
//! Tucks itself away while the visitor scrolls down the page and returns on
//! any upward scroll. The menu button records the click position so the menu
//! overlay can open from it.

use aetherlab_core::navbar::active_nav;
use aetherlab_core::{NavTarget, NavVisibility, Point};
use dioxus::prelude::*;

use crate::context::use_layout;

/// Height of the marker strip at the top of the page; while any of it is on
/// screen the bar stays visible.
const SENTINEL_HEIGHT: f64 = 24.0;

#[component]
pub fn NavBar() -> Element {
    let layout = use_layout();
    let mut visibility = use_signal(NavVisibility::default);

    use_effect(move || {
        let y = (layout.scroll_y)();
        let mut visibility = visibility.write();
        visibility.on_sentinel(y < SENTINEL_HEIGHT);
        visibility.on_scroll(y);
    });

    use_effect(move || {
        if layout.overlay.read().menu_open() {
            visibility.write().on_menu_open();
        }
    });

    let overlay = layout.overlay.read();
    let active = active_nav(overlay.pathname(), overlay.active_section());
    let menu_open = overlay.menu_open();
    drop(overlay);

    let bar_class = if visibility.read().hidden() {
        "nav-bar nav-hidden"
    } else {
        "nav-bar"
    };

    rsx! {
        div { class: "nav-sentinel", "aria-hidden": "true" }
        header { class: "{bar_class}",
            button {
                class: "nav-logo",
                r#type: "button",
                "data-cursor": "hover",
                onclick: move |_| layout.navigate(NavTarget::Home),
                span { class: "logo-mark", "\u{25C7}" }
                "AetherLab"
            }
            nav { class: "nav-links", "aria-label": "Primary",
                for target in NavTarget::PRIMARY {
                    button {
                        key: "{target.id()}",
                        class: if active == Some(target) { "nav-link active" } else { "nav-link" },
                        r#type: "button",
                        "aria-current": if active == Some(target) { "page" } else { "false" },
                        "data-cursor": "hover",
                        onclick: move |_| layout.navigate(target),
                        "{target.label()}"
                    }
                }
            }
            button {
                class: if menu_open { "nav-menu-toggle open" } else { "nav-menu-toggle" },
                r#type: "button",
                "aria-expanded": if menu_open { "true" } else { "false" },
                "aria-controls": "menu-overlay",
                "data-cursor": "hover",
                onclick: move |evt: MouseEvent| {
                    let origin = evt.client_coordinates();
                    let mut mask = layout.mask;
                    mask.write().update(Point::new(origin.x, origin.y));
                    layout.toggle_menu();
                },
                span { class: "menu-toggle-label", if menu_open { "Close" } else { "Menu" } }
                span { class: "menu-toggle-icon", "aria-hidden": "true" }
            }
        }
    }
}
