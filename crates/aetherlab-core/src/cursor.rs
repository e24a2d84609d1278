//! Decorative cursor state.
//!
//! The browser bridge reports raw pointer events; [`CursorState`] folds them
//! into a position, a visibility flag and a variant that sizes the ring.

use serde::Deserialize;

/// Tags that always get the hover ring
const HOVERABLE_TAGS: [&str; 6] = ["A", "BUTTON", "INPUT", "TEXTAREA", "SELECT", "LABEL"];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CursorVariant {
    #[default]
    Hidden,
    Reduced,
    Default,
    Hover,
    Drag,
}

impl CursorVariant {
    /// Ring diameter in pixels
    pub fn size(&self) -> u32 {
        match self {
            CursorVariant::Hidden | CursorVariant::Reduced | CursorVariant::Default => 12,
            CursorVariant::Hover => 28,
            CursorVariant::Drag => 36,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CursorVariant::Hidden => "cursor-hidden",
            CursorVariant::Reduced => "cursor-reduced",
            CursorVariant::Default => "cursor-default",
            CursorVariant::Hover => "cursor-hover",
            CursorVariant::Drag => "cursor-drag",
        }
    }
}

/// What the pointer is over: the element tag and the nearest `data-cursor`
/// attribute up the tree.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
pub struct TargetHint {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Pointer events forwarded from the document.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CursorEvent {
    Move { x: f64, y: f64 },
    Over(TargetHint),
    Down(TargetHint),
    Up(TargetHint),
    Leave,
}

/// Variant for the element under the pointer.
pub fn resolve_variant(hint: &TargetHint, reduced_motion: bool) -> CursorVariant {
    if reduced_motion {
        return CursorVariant::Reduced;
    }
    match hint.cursor.as_deref() {
        Some("drag") => CursorVariant::Drag,
        Some("hover") => CursorVariant::Hover,
        _ if HOVERABLE_TAGS.contains(&hint.tag.to_ascii_uppercase().as_str()) => {
            CursorVariant::Hover
        }
        _ => CursorVariant::Default,
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    visible: bool,
    variant: CursorVariant,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            variant: CursorVariant::Default,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: &CursorEvent, reduced_motion: bool) {
        match event {
            CursorEvent::Move { x, y } => {
                self.visible = true;
                self.x = *x;
                self.y = *y;
            }
            CursorEvent::Over(hint) | CursorEvent::Up(hint) => {
                self.variant = resolve_variant(hint, reduced_motion);
            }
            CursorEvent::Down(hint) => {
                if !reduced_motion && hint.cursor.as_deref() == Some("drag") {
                    self.variant = CursorVariant::Drag;
                }
            }
            CursorEvent::Leave => self.visible = false,
        }
    }

    /// Variant actually rendered, accounting for visibility.
    pub fn active_variant(&self, reduced_motion: bool) -> CursorVariant {
        if !self.visible {
            CursorVariant::Hidden
        } else if reduced_motion {
            CursorVariant::Reduced
        } else {
            self.variant
        }
    }

    pub fn style(&self, reduced_motion: bool) -> String {
        let variant = self.active_variant(reduced_motion);
        let size = variant.size();
        let half = f64::from(size) / 2.0;
        let opacity = if variant == CursorVariant::Hidden { 0 } else { 1 };
        format!(
            "width: {size}px; height: {size}px; opacity: {opacity}; transform: translate3d({:.1}px, {:.1}px, 0);",
            self.x - half,
            self.y - half
        )
    }
}
