//! Site layout: owns the overlay coordinator and wires it to the router.

use aetherlab_core::{CursorState, MaskReveal, MaskSize, NavCommand, NavTarget, OverlayCoordinator};
use dioxus::prelude::*;
use tracing::{debug, info};

use super::{ContactDrawer, CustomCursor, MenuOverlay, NavBar, Starfield};
use crate::app::{route_for, Route};
use crate::context::{launch_options, LayoutContext};
use crate::hooks::{use_overlay_keys, use_reduced_motion, use_scroll_lock, use_window_metrics};

/// Footer shortcuts. Contact opens the drawer over the current page.
const FOOTER_LINKS: [NavTarget; 2] = [NavTarget::About, NavTarget::Contact];

/// Wrapper around every route.
///
/// Route changes flow into [`OverlayCoordinator::on_route_change`]; commands
/// coming out of the coordinator flow back into the router.
#[component]
pub fn SiteLayout() -> Element {
    let path = use_route::<Route>().to_string();
    let nav = navigator();
    let initial_route = launch_options().initial_route.as_str();

    let mut overlay = use_signal(|| OverlayCoordinator::new(initial_route));
    let reduced_motion = use_reduced_motion();
    let (viewport, scroll_y) = use_window_metrics();
    let mut mask = use_signal(|| MaskReveal::new(MaskSize::default(), *viewport.peek()));
    let cursor = use_signal(CursorState::new);

    // The router always boots on `/`; jump to the requested route once
    let mut booted = use_signal(|| path == initial_route);
    use_hook(move || {
        if !*booted.peek() {
            debug!(route = initial_route, "Opening initial route");
            nav.replace(route_for(initial_route));
        }
    });

    use_effect(use_reactive(&path, move |path| {
        if !*booted.peek() {
            if path != initial_route {
                return;
            }
            booted.set(true);
        }
        if overlay.peek().pathname() != path {
            overlay.write().on_route_change(&path);
        }
    }));

    use_effect(move || {
        let viewport = viewport();
        mask.write().resize(viewport);
    });

    let locked = use_memo(move || overlay.read().scroll_locked());
    use_scroll_lock(locked);

    let dispatch = use_callback(move |command: NavCommand| {
        info!(path = command.path(), "Navigating");
        let target = route_for(command.path());
        match command {
            NavCommand::Push(_) => {
                nav.push(target);
            }
            NavCommand::Replace(_) => {
                nav.replace(target);
            }
        }
    });

    let layout = use_context_provider(|| LayoutContext {
        overlay,
        mask,
        cursor,
        reduced_motion,
        viewport,
        scroll_y,
        dispatch,
    });
    use_overlay_keys(layout);

    let site_class = if reduced_motion() { "site reduced-motion" } else { "site" };

    rsx! {
        div { class: "{site_class}",
            Starfield {}
            CustomCursor {}
            NavBar {}
            main { id: "main", class: "site-main",
                Outlet::<Route> {}
            }
            footer { class: "site-footer",
                span { "AetherLab \u{00B7} Motion-led product studio" }
                nav { class: "footer-links", "aria-label": "Footer",
                    for target in FOOTER_LINKS {
                        button {
                            key: "{target.id()}",
                            class: "footer-link",
                            r#type: "button",
                            "data-cursor": "hover",
                            onclick: move |_| layout.navigate(target),
                            "{target.label()}"
                        }
                    }
                }
                span { class: "footer-muted", "Built with care for reduced motion." }
            }
            MenuOverlay {}
            ContactDrawer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_links_reach_about_and_the_drawer() {
        let mut overlay = OverlayCoordinator::new("/work");
        let [about, contact] = FOOTER_LINKS;

        assert_eq!(
            overlay.navigate(about),
            Some(NavCommand::Push("/about".to_string()))
        );
        assert_eq!(
            overlay.navigate(contact),
            Some(NavCommand::Push("/contact".to_string()))
        );
        assert!(overlay.contact_open());
        assert_eq!(overlay.last_route(), "/work");
    }
}
