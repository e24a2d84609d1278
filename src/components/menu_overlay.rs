//! Full-screen menu overlay.
//!
//! Opens with a rounded mask that grows out of the menu button's click
//! position. Arrow keys move between entries and Home/End jump to the ends.
//! Escape and the Tab trap are handled at window level by the layout.

use std::rc::Rc;

use aetherlab_core::{FocusOwner, MaskReveal, MotionPreset, NavTarget};
use dioxus::prelude::*;
use tracing::warn;

use crate::context::use_layout;
use crate::hooks::trap_root;

const MENU_ITEMS: [NavTarget; 5] = [
    NavTarget::Home,
    NavTarget::Work,
    NavTarget::Resume,
    NavTarget::About,
    NavTarget::Contact,
];

/// Next focused entry for an arrow key, wrapping at both ends.
fn step_focus(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn MenuOverlay() -> Element {
    let layout = use_layout();
    let mut focused = use_signal(|| 0usize);
    let mut items = use_signal(|| vec![None::<Rc<MountedData>>; MENU_ITEMS.len()]);

    // Opening always starts on the first entry
    use_effect(move || {
        if layout.overlay.read().menu_open() {
            focused.set(0);
        }
    });

    use_effect(move || {
        let index = focused();
        if !layout.overlay.read().menu_open() {
            return;
        }
        let element = items.peek().get(index).cloned().flatten();
        if let Some(element) = element {
            spawn(async move {
                if let Err(e) = element.set_focus(true).await {
                    warn!("Could not focus menu entry: {:?}", e);
                }
            });
        }
    });

    let overlay = layout.overlay.read();
    let open = overlay.menu_open();
    let current = overlay.pathname().parse::<NavTarget>().ok();
    drop(overlay);

    let reduced = layout.reduced();
    let mask_style = format!(
        "{} clip-path: {};",
        layout.mask.read().css_vars(),
        MaskReveal::clip_path(open)
    );
    let content_style = MotionPreset::MenuContent.style(open, reduced);

    let onkeydown = move |evt: KeyboardEvent| {
        if layout.overlay.peek().focus_owner() != Some(FocusOwner::Menu) {
            return;
        }
        let len = MENU_ITEMS.len();
        let next = match evt.key() {
            Key::ArrowDown | Key::ArrowRight => step_focus(focused(), len, true),
            Key::ArrowUp | Key::ArrowLeft => step_focus(focused(), len, false),
            Key::Home => 0,
            Key::End => len - 1,
            _ => return,
        };
        evt.prevent_default();
        focused.set(next);
    };

    rsx! {
        div {
            id: trap_root(FocusOwner::Menu),
            class: if open { "menu-overlay open" } else { "menu-overlay" },
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "Site menu",
            "aria-hidden": if open { "false" } else { "true" },
            style: "{mask_style}",
            onkeydown: onkeydown,
            div { class: "menu-content", style: "{content_style}",
                p { class: "menu-eyebrow", "Navigate" }
                ul { class: "menu-list",
                    for (index, target) in MENU_ITEMS.into_iter().enumerate() {
                        li { key: "{target.id()}",
                            button {
                                class: if current == Some(target) { "menu-item current" } else { "menu-item" },
                                r#type: "button",
                                tabindex: if open { "0" } else { "-1" },
                                "aria-current": if current == Some(target) { "page" } else { "false" },
                                "data-cursor": "hover",
                                onmounted: move |evt: MountedEvent| {
                                    if let Some(slot) = items.write().get_mut(index) {
                                        *slot = Some(evt.data());
                                    }
                                },
                                onfocus: move |_| focused.set(index),
                                onclick: move |_| {
                                    layout.navigate(target);
                                    layout.close_menu();
                                },
                                span { class: "menu-item-index", {format!("{:02}", index + 1)} }
                                span { class: "menu-item-label", "{target.label()}" }
                                span { class: "menu-item-description", "{target.description()}" }
                            }
                        }
                    }
                }
                p { class: "menu-footnote", "Press Esc to close" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(step_focus(0, 5, true), 1);
        assert_eq!(step_focus(4, 5, true), 0);
        assert_eq!(step_focus(0, 5, false), 4);
        assert_eq!(step_focus(3, 0, true), 0);
    }
}
