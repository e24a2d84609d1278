//! Layout context shared with every page.
//!
//! `SiteLayout` owns the overlay coordinator and the browser-fed signals and
//! provides them through a single [`LayoutContext`].
//!
//! ## Usage
//!
//! ```ignore
//! let layout = use_layout();
//! rsx! {
//!     button { onclick: move |_| layout.navigate(NavTarget::Contact), "Start a project" }
//! }
//! ```

use aetherlab_core::{CursorState, MaskReveal, NavCommand, NavTarget, OverlayCoordinator, Viewport};
use dioxus::prelude::*;

pub use crate::launch_options;

/// Handles to the layout-owned state.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub overlay: Signal<OverlayCoordinator>,
    pub mask: Signal<MaskReveal>,
    pub cursor: Signal<CursorState>,
    pub reduced_motion: Memo<bool>,
    pub viewport: Signal<Viewport>,
    pub scroll_y: Signal<f64>,
    /// Applies router commands returned by the coordinator
    pub dispatch: Callback<NavCommand>,
}

impl LayoutContext {
    fn run(&self, command: Option<NavCommand>) {
        if let Some(command) = command {
            self.dispatch.call(command);
        }
    }

    pub fn navigate(&self, target: NavTarget) {
        let mut overlay = self.overlay;
        let command = overlay.write().navigate(target);
        self.run(command);
    }

    pub fn open_contact(&self) {
        let mut overlay = self.overlay;
        let command = overlay.write().open_contact();
        self.run(command);
    }

    pub fn close_contact(&self) {
        let mut overlay = self.overlay;
        let command = overlay.write().close_contact();
        self.run(command);
    }

    pub fn toggle_menu(&self) {
        let mut overlay = self.overlay;
        overlay.write().toggle_menu();
    }

    pub fn close_menu(&self) {
        let mut overlay = self.overlay;
        overlay.write().close_menu();
    }

    /// Record the home section in the reading band. Skipped while the
    /// coordinator is borrowed elsewhere.
    pub fn set_active_section(&self, id: Option<String>) {
        let mut overlay = self.overlay;
        if let Ok(mut overlay) = overlay.try_write() {
            overlay.set_active_section(id);
        };
    }

    pub fn reduced(&self) -> bool {
        (self.reduced_motion)()
    }
}

/// Hook to access the layout context.
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>()
}
