//! Nav bar: hide-on-scroll rules and link highlighting.

use crate::route::NavTarget;

/// Scrolling down by more than this hides the bar
const HIDE_DELTA: f64 = 8.0;
/// Scrolling up by more than this shows it again
const SHOW_DELTA: f64 = -6.0;
/// The bar only hides once the page is scrolled past this point
const HIDE_AFTER: f64 = 120.0;
/// Near the top the bar is always shown
const ALWAYS_SHOW_BELOW: f64 = 80.0;

/// Whether the floating nav bar is tucked away.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavVisibility {
    hidden: bool,
    last_y: f64,
    sentinel_visible: bool,
}

impl NavVisibility {
    pub fn new(initial_y: f64) -> Self {
        Self {
            hidden: false,
            last_y: initial_y,
            sentinel_visible: true,
        }
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn on_scroll(&mut self, y: f64) {
        let delta = y - self.last_y;
        let scrolling_down = delta > HIDE_DELTA;
        let scrolling_up = delta < SHOW_DELTA;

        if scrolling_down && !self.sentinel_visible && y > HIDE_AFTER {
            self.hidden = true;
        } else if scrolling_up || y < ALWAYS_SHOW_BELOW {
            self.hidden = false;
        }

        self.last_y = y;
    }

    /// The marker right under the bar entered or left the viewport.
    pub fn on_sentinel(&mut self, visible: bool) {
        self.sentinel_visible = visible;
        if visible {
            self.hidden = false;
        }
    }

    pub fn on_menu_open(&mut self) {
        self.hidden = false;
    }
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Which nav link is highlighted for a path and home-page section.
pub fn active_nav(pathname: &str, active_section: Option<&str>) -> Option<NavTarget> {
    for target in [
        NavTarget::Resume,
        NavTarget::About,
        NavTarget::Contact,
        NavTarget::Work,
    ] {
        if pathname.starts_with(target.path()) {
            return Some(target);
        }
    }

    match active_section {
        Some(id) => NavTarget::from_section_id(id),
        None => Some(NavTarget::Work),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled_past_sentinel() -> NavVisibility {
        let mut nav = NavVisibility::new(0.0);
        nav.on_sentinel(false);
        nav
    }

    #[test]
    fn hides_when_scrolling_down_past_threshold() {
        let mut nav = scrolled_past_sentinel();
        nav.on_scroll(100.0);
        nav.on_scroll(200.0);
        assert!(nav.hidden());
    }

    #[test]
    fn small_moves_do_nothing() {
        let mut nav = scrolled_past_sentinel();
        nav.on_scroll(300.0);
        assert!(nav.hidden());
        nav.on_scroll(296.0);
        assert!(nav.hidden());
    }

    #[test]
    fn shows_when_scrolling_up_or_near_top() {
        let mut nav = scrolled_past_sentinel();
        nav.on_scroll(400.0);
        assert!(nav.hidden());
        nav.on_scroll(380.0);
        assert!(!nav.hidden());

        nav.on_scroll(600.0);
        nav.on_scroll(50.0);
        assert!(!nav.hidden());
    }

    #[test]
    fn visible_sentinel_blocks_hiding() {
        let mut nav = NavVisibility::default();
        nav.on_scroll(500.0);
        assert!(!nav.hidden());
    }

    #[test]
    fn menu_open_reveals_bar() {
        let mut nav = scrolled_past_sentinel();
        nav.on_scroll(500.0);
        nav.on_menu_open();
        assert!(!nav.hidden());
    }

    #[test]
    fn highlight_prefers_path_then_section() {
        assert_eq!(active_nav("/resume", None), Some(NavTarget::Resume));
        assert_eq!(active_nav("/work/nebula-horizon", None), Some(NavTarget::Work));
        assert_eq!(active_nav("/contact", Some("work")), Some(NavTarget::Contact));
        assert_eq!(active_nav("/", Some("work")), Some(NavTarget::Work));
        assert_eq!(active_nav("/", Some("approach")), None);
        assert_eq!(active_nav("/", None), Some(NavTarget::Work));
    }
}
