//! Mask reveal geometry.
//!
//! The menu overlay opens from a small rounded window centred on the click
//! origin. The window is expressed as a CSS `inset()` rectangle: the four
//! distances from the viewport edges to the window edges.

/// A point in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a point into `[0, width] × [0, height]`.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            clamp(point.x, 0.0, self.width),
            clamp(point.y, 0.0, self.height),
        )
    }
}

/// Size of the reveal window.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MaskSize {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl Default for MaskSize {
    fn default() -> Self {
        Self {
            width: 260.0,
            height: 180.0,
            radius: 48.0,
        }
    }
}

/// Edge distances of the reveal window plus its corner radius.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct MaskInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub radius: f64,
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Compute the inset rectangle for a window of `size` centred on `point`.
///
/// Each distance is clamped to `[0, viewport dimension]`, so a window hanging
/// off an edge never produces a negative inset.
pub fn distances(point: Point, viewport: Viewport, size: MaskSize) -> MaskInsets {
    let half_w = size.width / 2.0;
    let half_h = size.height / 2.0;

    MaskInsets {
        top: clamp(point.y - half_h, 0.0, viewport.height),
        right: clamp(viewport.width - (point.x + half_w), 0.0, viewport.width),
        bottom: clamp(viewport.height - (point.y + half_h), 0.0, viewport.height),
        left: clamp(point.x - half_w, 0.0, viewport.width),
        radius: size.radius,
    }
}

/// Stateful mask origin tracking viewport resizes and pointer updates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MaskReveal {
    size: MaskSize,
    viewport: Viewport,
    origin: Point,
}

impl MaskReveal {
    /// Start with the origin at the viewport centre.
    pub fn new(size: MaskSize, viewport: Viewport) -> Self {
        Self {
            size,
            viewport,
            origin: viewport.center(),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new viewport size and pull the origin back inside it.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.origin = viewport.clamp(self.origin);
    }

    /// Move the origin to a pointer position, clamped into the viewport.
    pub fn update(&mut self, point: Point) {
        self.origin = self.viewport.clamp(point);
    }

    pub fn insets(&self) -> MaskInsets {
        distances(self.origin, self.viewport, self.size)
    }

    /// CSS custom properties consumed by [`MaskReveal::clip_path`].
    pub fn css_vars(&self) -> String {
        let i = self.insets();
        format!(
            "--mask-top: {}px; --mask-right: {}px; --mask-bottom: {}px; --mask-left: {}px; --mask-radius: {}px;",
            i.top, i.right, i.bottom, i.left, i.radius
        )
    }

    /// Clip path of the overlay panel in its open or closed state.
    pub fn clip_path(open: bool) -> &'static str {
        if open {
            "inset(0% 0% 0% 0% round 0px)"
        } else {
            "inset(var(--mask-top, 50%) var(--mask-right, 50%) var(--mask-bottom, 50%) var(--mask-left, 50%) round var(--mask-radius, 24px))"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_window_is_symmetric() {
        let viewport = Viewport::new(1000.0, 800.0);
        let insets = distances(viewport.center(), viewport, MaskSize::default());
        assert_eq!(insets.left, 370.0);
        assert_eq!(insets.right, 370.0);
        assert_eq!(insets.top, 310.0);
        assert_eq!(insets.bottom, 310.0);
        assert_eq!(insets.radius, 48.0);
    }

    #[test]
    fn corner_point_clamps_to_zero() {
        let viewport = Viewport::new(1000.0, 800.0);
        let insets = distances(Point::new(0.0, 0.0), viewport, MaskSize::default());
        assert_eq!(insets.left, 0.0);
        assert_eq!(insets.top, 0.0);
        assert_eq!(insets.right, 870.0);
        assert_eq!(insets.bottom, 710.0);
    }

    #[test]
    fn update_clamps_outside_points() {
        let mut mask = MaskReveal::new(MaskSize::default(), Viewport::new(400.0, 300.0));
        mask.update(Point::new(-50.0, 900.0));
        assert_eq!(mask.origin(), Point::new(0.0, 300.0));
    }

    #[test]
    fn resize_reclamps_origin() {
        let mut mask = MaskReveal::new(MaskSize::default(), Viewport::new(1200.0, 900.0));
        mask.update(Point::new(1100.0, 850.0));
        mask.resize(Viewport::new(600.0, 400.0));
        assert_eq!(mask.origin(), Point::new(600.0, 400.0));
    }

    #[test]
    fn zero_viewport_yields_zero_insets() {
        let mask = MaskReveal::new(MaskSize::default(), Viewport::default());
        let insets = mask.insets();
        assert_eq!(
            (insets.top, insets.right, insets.bottom, insets.left),
            (0.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn css_vars_render_pixels() {
        let mask = MaskReveal::new(MaskSize::default(), Viewport::new(1000.0, 800.0));
        let vars = mask.css_vars();
        assert!(vars.contains("--mask-left: 370px"));
        assert!(vars.contains("--mask-radius: 48px"));
    }
}
