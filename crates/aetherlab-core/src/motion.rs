//! Motion tokens and the named transition table.
//!
//! Components never hard-code timings. They look up a [`MotionPreset`] and
//! get back the visual target for a state plus the transition that drives it,
//! rendered to inline CSS.

use std::fmt;

/// Named durations in milliseconds
pub mod durations {
    pub const D120: u32 = 120;
    pub const D160: u32 = 160;
    pub const D180: u32 = 180;
    pub const D240: u32 = 240;
    pub const D320: u32 = 320;
    pub const D400: u32 = 400;

    pub const TRANSITION_IN: u32 = D180;
    pub const TRANSITION_OUT: u32 = D240;
    pub const TRANSITION_SNAP: u32 = D320;
}

/// A cubic-bezier easing curve.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Easing(pub [f64; 4]);

impl Easing {
    pub const T_IN: Easing = Easing([0.32, 0.0, 0.67, 0.0]);
    pub const T_OUT: Easing = Easing([0.33, 1.0, 0.68, 1.0]);
    pub const T_SNAP: Easing = Easing([0.16, 1.0, 0.3, 1.0]);
    pub const CALM: Easing = Easing([0.215, 0.61, 0.355, 1.0]);
    pub const CALM_IN_OUT: Easing = Easing([0.86, 0.0, 0.07, 1.0]);
    pub const STANDARD: Easing = Easing([0.4, 0.0, 0.2, 1.0]);
    pub const HERO: Easing = Easing([0.32, 0.16, 0.16, 1.0]);
    pub const EASE_IN_OUT: Easing = Easing([0.42, 0.0, 0.58, 1.0]);

    pub const LINEAR: Easing = Easing([0.0, 0.0, 1.0, 1.0]);
    pub const EASE_IN: Easing = Easing([0.42, 0.0, 1.0, 1.0]);
    pub const EASE_OUT: Easing = Easing([0.0, 0.0, 0.58, 1.0]);
    pub const CIRC_IN: Easing = Easing([0.55, 0.0, 1.0, 0.45]);
    pub const CIRC_OUT: Easing = Easing([0.0, 0.55, 0.45, 1.0]);
    pub const CIRC_IN_OUT: Easing = Easing([0.85, 0.0, 0.15, 1.0]);
    pub const BACK_IN: Easing = Easing([0.36, 0.0, 0.66, -0.56]);
    pub const BACK_OUT: Easing = Easing([0.34, 1.56, 0.64, 1.0]);
    pub const BACK_IN_OUT: Easing = Easing([0.68, -0.6, 0.32, 1.6]);
    pub const ANTICIPATE: Easing = Easing([0.36, 0.0, 0.66, -0.56]);
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "cubic-bezier({}, {}, {}, {})", a, b, c, d)
    }
}

/// Parse an easing token from case-study frontmatter.
///
/// Accepts `cubic-bezier(a, b, c, d)` or a named curve; anything else falls
/// back to ease-in-out.
pub fn parse_easing(value: &str) -> Easing {
    let value = value.trim();
    if value.is_empty() {
        return Easing::EASE_IN_OUT;
    }

    if let Some(easing) = parse_cubic_bezier(value) {
        return easing;
    }

    match value {
        "linear" => Easing::LINEAR,
        "easeIn" => Easing::EASE_IN,
        "easeOut" => Easing::EASE_OUT,
        "easeInOut" => Easing::EASE_IN_OUT,
        "circIn" => Easing::CIRC_IN,
        "circOut" => Easing::CIRC_OUT,
        "circInOut" => Easing::CIRC_IN_OUT,
        "anticipate" => Easing::ANTICIPATE,
        "backIn" => Easing::BACK_IN,
        "backOut" => Easing::BACK_OUT,
        "backInOut" => Easing::BACK_IN_OUT,
        _ => Easing::EASE_IN_OUT,
    }
}

fn parse_cubic_bezier(value: &str) -> Option<Easing> {
    let lower = value.to_ascii_lowercase();
    let start = lower.find("cubic-bezier(")? + "cubic-bezier(".len();
    let end = start + lower[start..].find(')')?;

    let parts: Vec<f64> = lower[start..end]
        .split(',')
        .map(|piece| piece.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [a, b, c, d] if parts.iter().all(|n| n.is_finite()) => Some(Easing([*a, *b, *c, *d])),
        _ => None,
    }
}

/// Timing of one state change.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
    pub delay_ms: u32,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            delay_ms: 0,
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// CSS `transition` declaration for the given properties.
    pub fn css(&self, properties: &[&str]) -> String {
        let parts: Vec<String> = properties
            .iter()
            .map(|prop| {
                format!(
                    "{} {}ms {} {}ms",
                    prop, self.duration_ms, self.easing, self.delay_ms
                )
            })
            .collect();
        format!("transition: {};", parts.join(", "))
    }
}

/// Where an element should end up in a given state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisualTarget {
    pub opacity: f64,
    /// Vertical offset in pixels
    pub translate_y: f64,
    /// Vertical offset as a percentage of the element height (sheets)
    pub translate_y_pct: f64,
}

impl VisualTarget {
    pub const REST: VisualTarget = VisualTarget {
        opacity: 1.0,
        translate_y: 0.0,
        translate_y_pct: 0.0,
    };

    pub const fn faded(translate_y: f64) -> Self {
        Self {
            opacity: 0.0,
            translate_y,
            translate_y_pct: 0.0,
        }
    }

    pub fn css(&self) -> String {
        if self.translate_y_pct != 0.0 {
            format!(
                "opacity: {}; transform: translateY({}%);",
                self.opacity, self.translate_y_pct
            )
        } else {
            format!(
                "opacity: {}; transform: translateY({}px);",
                self.opacity, self.translate_y
            )
        }
    }
}

/// Named entries of the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MotionPreset {
    /// Menu content column fading up after the panel opens
    MenuContent,
    /// Contact drawer sheet sliding up from the bottom edge
    DrawerSheet,
    /// Dimmed backdrop behind overlays
    Backdrop,
    /// Hero copy and tiles on first paint
    HeroItem,
    /// Staggered card grids; carries the card index
    Card(u32),
}

impl MotionPreset {
    /// Resolve a preset for one state of the element.
    pub fn resolve(self, shown: bool, reduced_motion: bool) -> (VisualTarget, Transition) {
        let lift = |px: f64| if reduced_motion { 0.0 } else { px };

        match self {
            MotionPreset::MenuContent => {
                let target = if shown {
                    VisualTarget::REST
                } else {
                    VisualTarget::faded(lift(12.0))
                };
                (target, Transition::new(durations::D320, Easing::CALM))
            }
            MotionPreset::DrawerSheet => {
                let target = if shown {
                    VisualTarget::REST
                } else {
                    VisualTarget {
                        opacity: 1.0,
                        translate_y: 0.0,
                        translate_y_pct: 100.0,
                    }
                };
                let transition = if shown {
                    Transition::new(durations::TRANSITION_OUT, Easing::T_OUT)
                } else {
                    Transition::new(durations::TRANSITION_IN, Easing::T_IN)
                };
                (target, transition)
            }
            MotionPreset::Backdrop => {
                let target = if shown {
                    VisualTarget::REST
                } else {
                    VisualTarget::faded(0.0)
                };
                (target, Transition::new(durations::D160, Easing::STANDARD))
            }
            MotionPreset::HeroItem => {
                let target = if shown {
                    VisualTarget::REST
                } else {
                    VisualTarget::faded(lift(24.0))
                };
                let duration = if reduced_motion { 280 } else { 480 };
                (target, Transition::new(duration, Easing::HERO))
            }
            MotionPreset::Card(index) => {
                let target = if shown {
                    VisualTarget::REST
                } else {
                    VisualTarget::faded(lift(16.0))
                };
                let delay = if reduced_motion { 0 } else { index * 60 };
                (
                    target,
                    Transition::new(durations::D240, Easing::STANDARD).with_delay(delay),
                )
            }
        }
    }

    /// Inline style for the element in the given state.
    pub fn style(self, shown: bool, reduced_motion: bool) -> String {
        let (target, transition) = self.resolve(shown, reduced_motion);
        format!(
            "{} {}",
            target.css(),
            transition.css(&["opacity", "transform"])
        )
    }

    /// Like [`MotionPreset::style`], delayed by `index` steps of `step_ms`.
    /// Reduced motion drops the stagger.
    pub fn staggered_style(self, shown: bool, reduced_motion: bool, index: u32, step_ms: u32) -> String {
        let (target, transition) = self.resolve(shown, reduced_motion);
        let delay = if reduced_motion { 0 } else { index * step_ms };
        format!(
            "{} {}",
            target.css(),
            transition
                .with_delay(transition.delay_ms + delay)
                .css(&["opacity", "transform"])
        )
    }
}
