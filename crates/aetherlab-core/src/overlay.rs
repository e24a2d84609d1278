//! Overlay coordination for the site layout.
//!
//! The layout owns a single [`OverlayCoordinator`] and routes every menu,
//! drawer and navigation event through it. The coordinator never touches the
//! router itself: operations that need a route change hand back a
//! [`NavCommand`] which the caller applies.
//!
//! ## Rules
//!
//! - Any route change closes the menu overlay.
//! - `/contact` forces the drawer open; every other route closes it and
//!   becomes the route the drawer returns to.
//! - Closing the drawer while on `/contact` replaces history with the
//!   remembered route (root when nothing was remembered).
//! - Leaving the home route clears the scroll-spy section.

use serde::Deserialize;
use tracing::debug;

use crate::route::{normalize_path, NavTarget, CONTACT_PATH, HOME_PATH};

/// Router instruction produced by a coordinator operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NavCommand {
    /// Navigate, adding a history entry
    Push(String),
    /// Navigate, replacing the current history entry
    Replace(String),
}

impl NavCommand {
    pub fn path(&self) -> &str {
        match self {
            NavCommand::Push(path) | NavCommand::Replace(path) => path,
        }
    }
}

/// Which overlay currently holds the keyboard focus trap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusOwner {
    Menu,
    Drawer,
}

/// Shared UI state of the site layout: menu flag, drawer flag, route memory
/// and the active home-page section.
#[derive(Clone, PartialEq, Debug)]
pub struct OverlayCoordinator {
    pathname: String,
    menu_open: bool,
    contact_open: bool,
    last_route: String,
    active_section: Option<String>,
}

impl OverlayCoordinator {
    /// Create the coordinator for the route the site was opened on.
    pub fn new(initial_path: &str) -> Self {
        let pathname = normalize_path(initial_path);
        let on_contact = pathname == CONTACT_PATH;
        let last_route = if on_contact {
            HOME_PATH.to_string()
        } else {
            pathname.clone()
        };

        Self {
            pathname,
            menu_open: false,
            contact_open: on_contact,
            last_route,
            active_section: None,
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn contact_open(&self) -> bool {
        self.contact_open
    }

    /// Route the drawer returns to when it closes on `/contact`
    pub fn last_route(&self) -> &str {
        &self.last_route
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    fn on_contact_route(&self) -> bool {
        self.pathname == CONTACT_PATH
    }

    /// Open the contact drawer, switching to `/contact` if needed.
    pub fn open_contact(&mut self) -> Option<NavCommand> {
        self.contact_open = true;
        if self.on_contact_route() {
            debug!("Contact drawer opened in place");
            return None;
        }

        self.last_route = self.pathname.clone();
        debug!(from = %self.last_route, "Contact drawer opened, switching to {}", CONTACT_PATH);
        Some(NavCommand::Push(CONTACT_PATH.to_string()))
    }

    /// Close the contact drawer, returning to the remembered route when the
    /// drawer owned the current URL.
    pub fn close_contact(&mut self) -> Option<NavCommand> {
        self.contact_open = false;
        if !self.on_contact_route() {
            return None;
        }

        let target = if self.last_route.is_empty() {
            HOME_PATH.to_string()
        } else {
            self.last_route.clone()
        };
        debug!(to = %target, "Contact drawer closed, restoring route");
        Some(NavCommand::Replace(target))
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "Menu overlay toggled");
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Resolve a navigation request from the nav bar or menu overlay.
    pub fn navigate(&mut self, target: NavTarget) -> Option<NavCommand> {
        match target {
            NavTarget::Contact => self.open_contact(),
            other => Some(NavCommand::Push(other.path().to_string())),
        }
    }

    /// Apply the effects of the router landing on `path`.
    pub fn on_route_change(&mut self, path: &str) {
        let path = normalize_path(path);
        self.menu_open = false;

        if path == CONTACT_PATH {
            self.contact_open = true;
        } else {
            self.contact_open = false;
            self.last_route = path.clone();
        }

        if path != HOME_PATH {
            self.active_section = None;
        }

        debug!(path = %path, "Route changed");
        self.pathname = path;
    }

    pub fn set_active_section(&mut self, id: Option<String>) {
        self.active_section = id;
    }

    /// Page scroll is suppressed while either overlay is open
    pub fn scroll_locked(&self) -> bool {
        self.menu_open || self.contact_open
    }

    /// The overlay whose focus trap should be active.
    ///
    /// The drawer renders above the menu, so it wins if both flags are set.
    pub fn focus_owner(&self) -> Option<FocusOwner> {
        if self.contact_open {
            Some(FocusOwner::Drawer)
        } else if self.menu_open {
            Some(FocusOwner::Menu)
        } else {
            None
        }
    }
}

/// Where a Tab press lands inside a trapped overlay.
///
/// `current` is the position of the focused element among the overlay's
/// `count` focusable elements, or `None` when focus sits outside it. Focus
/// wraps at both ends and an overlay with nothing focusable yields `None`.
pub fn trap_focus(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let next = match (current.filter(|&index| index < count), backwards) {
        (None, false) => 0,
        (None, true) => last,
        (Some(index), false) if index == last => 0,
        (Some(index), false) => index + 1,
        (Some(0), true) => last,
        (Some(index), true) => index - 1,
    };
    Some(next)
}

/// Window-level key press reported while an overlay holds the trap.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OverlayKey {
    Escape,
    Tab {
        #[serde(default)]
        backwards: bool,
        #[serde(default)]
        index: Option<usize>,
        count: usize,
    },
}

/// What the layout does with an [`OverlayKey`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyAction {
    CloseMenu,
    CloseDrawer,
    /// Focus the overlay's focusable element at this position
    Focus(usize),
}

impl OverlayKey {
    /// Resolve the key against the overlay that currently owns focus.
    pub fn action(self, owner: Option<FocusOwner>) -> Option<KeyAction> {
        let owner = owner?;
        match self {
            OverlayKey::Escape => Some(match owner {
                FocusOwner::Drawer => KeyAction::CloseDrawer,
                FocusOwner::Menu => KeyAction::CloseMenu,
            }),
            OverlayKey::Tab {
                backwards,
                index,
                count,
            } => trap_focus(index, count, backwards).map(KeyAction::Focus),
        }
    }
}

/// Remembers the document's scroll style while overlays suppress scrolling.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ScrollLock {
    previous: Option<String>,
}

/// Value written to `body.style.overflow` while locked
pub const LOCKED_OVERFLOW: &str = "hidden";

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_engaged(&self) -> bool {
        self.previous.is_some()
    }

    /// Lock scrolling. Returns the style to apply, or `None` when already
    /// locked (the first remembered value is kept).
    pub fn engage(&mut self, current_overflow: &str) -> Option<&'static str> {
        if self.previous.is_some() {
            return None;
        }
        self.previous = Some(current_overflow.to_string());
        Some(LOCKED_OVERFLOW)
    }

    /// Unlock scrolling. Returns the remembered style, once.
    pub fn release(&mut self) -> Option<String> {
        self.previous.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_on_contact_opens_drawer_and_defaults_to_root() {
        let overlay = OverlayCoordinator::new("/contact");
        assert!(overlay.contact_open());
        assert_eq!(overlay.last_route(), "/");
    }

    #[test]
    fn starting_elsewhere_remembers_the_path() {
        let overlay = OverlayCoordinator::new("/resume");
        assert!(!overlay.contact_open());
        assert_eq!(overlay.last_route(), "/resume");

        let empty = OverlayCoordinator::new("");
        assert_eq!(empty.pathname(), "/");
    }

    #[test]
    fn close_contact_off_the_contact_route_does_not_navigate() {
        let mut overlay = OverlayCoordinator::new("/work");
        overlay.open_contact();
        // Router has not landed yet: still on /work.
        assert_eq!(overlay.close_contact(), None);
        assert!(!overlay.contact_open());
    }

    #[test]
    fn route_change_closes_menu() {
        let mut overlay = OverlayCoordinator::new("/");
        overlay.toggle_menu();
        assert!(overlay.menu_open());
        overlay.on_route_change("/about");
        assert!(!overlay.menu_open());
    }

    #[test]
    fn navigate_pushes_paths_and_delegates_contact() {
        let mut overlay = OverlayCoordinator::new("/");
        assert_eq!(
            overlay.navigate(NavTarget::Resume),
            Some(NavCommand::Push("/resume".into()))
        );
        assert_eq!(
            overlay.navigate(NavTarget::Contact),
            Some(NavCommand::Push("/contact".into()))
        );
        assert!(overlay.contact_open());
    }

    #[test]
    fn home_route_keeps_active_section() {
        let mut overlay = OverlayCoordinator::new("/");
        overlay.set_active_section(Some("approach".into()));
        overlay.on_route_change("/");
        assert_eq!(overlay.active_section(), Some("approach"));
    }

    #[test]
    fn focus_owner_prefers_drawer() {
        let mut overlay = OverlayCoordinator::new("/");
        assert_eq!(overlay.focus_owner(), None);
        overlay.toggle_menu();
        assert_eq!(overlay.focus_owner(), Some(FocusOwner::Menu));
        overlay.open_contact();
        assert_eq!(overlay.focus_owner(), Some(FocusOwner::Drawer));
        assert!(overlay.scroll_locked());
    }

    #[test]
    fn scroll_lock_remembers_first_value_once() {
        let mut lock = ScrollLock::new();
        assert_eq!(lock.engage("auto"), Some("hidden"));
        assert_eq!(lock.engage("hidden"), None);
        assert!(lock.is_engaged());
        assert_eq!(lock.release(), Some("auto".to_string()));
        assert_eq!(lock.release(), None);
    }

    #[test]
    fn tab_wraps_inside_the_trap() {
        assert_eq!(trap_focus(Some(0), 3, false), Some(1));
        assert_eq!(trap_focus(Some(2), 3, false), Some(0));
        assert_eq!(trap_focus(Some(0), 3, true), Some(2));
        assert_eq!(trap_focus(Some(2), 3, true), Some(1));
    }

    #[test]
    fn tab_from_outside_pulls_focus_in() {
        assert_eq!(trap_focus(None, 4, false), Some(0));
        assert_eq!(trap_focus(None, 4, true), Some(3));
        // Stale index from a list that shrank.
        assert_eq!(trap_focus(Some(9), 2, false), Some(0));
        assert_eq!(trap_focus(None, 0, false), None);
        assert_eq!(trap_focus(Some(0), 1, true), Some(0));
    }

    #[test]
    fn escape_closes_the_top_overlay_only() {
        let mut overlay = OverlayCoordinator::new("/work");
        assert_eq!(OverlayKey::Escape.action(overlay.focus_owner()), None);

        overlay.toggle_menu();
        assert_eq!(
            OverlayKey::Escape.action(overlay.focus_owner()),
            Some(KeyAction::CloseMenu)
        );

        overlay.open_contact();
        assert_eq!(
            OverlayKey::Escape.action(overlay.focus_owner()),
            Some(KeyAction::CloseDrawer)
        );
    }

    #[test]
    fn tab_key_decodes_and_stays_trapped() {
        let key: OverlayKey =
            serde_json::from_str(r#"{"kind":"tab","backwards":true,"index":0,"count":5}"#)
                .unwrap();
        assert_eq!(key.action(Some(FocusOwner::Drawer)), Some(KeyAction::Focus(4)));
        assert_eq!(key.action(None), None);

        let outside: OverlayKey =
            serde_json::from_str(r#"{"kind":"tab","index":null,"count":5}"#).unwrap();
        assert_eq!(outside.action(Some(FocusOwner::Menu)), Some(KeyAction::Focus(0)));
    }

    #[test]
    fn nav_command_exposes_path() {
        assert_eq!(NavCommand::Replace("/about".into()).path(), "/about");
    }
}
