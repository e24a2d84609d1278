//! AetherLab Core Library
//!
//! Framework-free UI logic behind the AetherLab portfolio site.
//!
//! ## Overview
//!
//! Everything the site does that has rules is modelled here as plain state
//! and pure functions, so the Dioxus layer only wires events in and applies
//! the results:
//!
//! - **Overlay coordination**: menu overlay, contact drawer, route memory
//! - **Mask reveal**: inset rectangle the menu opens from
//! - **Scroll spy**: which home section is in view
//! - **Contact form**: bounded message, validation, stubbed submission
//! - **Case library**: slug resolution against bundled Markdown documents
//!
//! ## Quick Start
//!
//! ```
//! use aetherlab_core::{NavCommand, OverlayCoordinator};
//!
//! let mut overlay = OverlayCoordinator::new("/work");
//! assert_eq!(overlay.open_contact(), Some(NavCommand::Push("/contact".into())));
//! overlay.on_route_change("/contact");
//!
//! assert_eq!(overlay.close_contact(), Some(NavCommand::Replace("/work".into())));
//! ```

pub mod cases;
pub mod char_count;
pub mod contact;
pub mod cursor;
pub mod error;
pub mod mask;
pub mod motion;
pub mod navbar;
pub mod overlay;
pub mod parallax;
pub mod reel;
pub mod route;
pub mod scroll_spy;
pub mod starfield;
pub mod work;

// Re-exports
pub use cases::{CaseError, CaseFrontmatter, CaseLibrary, CaseStudy};
pub use char_count::CharBudget;
pub use contact::{ContactError, ContactForm, HintTone, SubmitStatus, Submission};
pub use cursor::{CursorEvent, CursorState, CursorVariant};
pub use error::{PortfolioError, PortfolioResult};
pub use mask::{MaskInsets, MaskReveal, MaskSize, Point, Viewport};
pub use motion::{Easing, MotionPreset, Transition, VisualTarget};
pub use navbar::NavVisibility;
pub use overlay::{
    trap_focus, FocusOwner, KeyAction, NavCommand, OverlayCoordinator, OverlayKey, ScrollLock,
};
pub use parallax::{Bounds, Parallax};
pub use reel::ReelScroller;
pub use route::NavTarget;
pub use scroll_spy::{ScrollSpy, SectionEntry};
pub use starfield::{Star, Starfield};
pub use work::{WorkCategory, WorkFilter, WorkProject};
