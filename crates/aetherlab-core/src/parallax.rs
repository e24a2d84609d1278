//! Pointer-driven parallax and tilt offsets.

use crate::mask::Point;

/// Element bounds in viewport coordinates.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the box, `0.0..=1.0` when inside.
    fn relative(&self, pointer: Point) -> (f64, f64) {
        (
            (pointer.x - self.left) / self.width,
            (pointer.y - self.top) / self.height,
        )
    }
}

/// Depth multipliers for the four hero tiles
pub const HERO_TILE_DEPTHS: [f64; 4] = [1.0, -0.7, 0.55, -0.4];

/// Depth multipliers for the capability board tiles
pub const BOARD_TILE_DEPTHS: [f64; 6] = [12.0, -9.0, 7.0, -6.0, 5.0, -4.0];

/// Maximum card tilt in degrees
pub const MAX_TILT: f64 = 6.0;

/// How a pointer position inside a box maps to a parallax offset.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Parallax {
    limit: f64,
    /// Multiplier applied to the centred position before clamping
    gain: f64,
    /// Clamp the centred position to ±1 before scaling (board style)
    clamp_unit: bool,
}

impl Parallax {
    /// Hero grid: centred position doubled, scaled to 14 px, clamped.
    pub const fn hero() -> Self {
        Self {
            limit: 14.0,
            gain: 2.0,
            clamp_unit: false,
        }
    }

    /// Capability board: centred position clamped to ±1 then scaled to 10.
    pub const fn board() -> Self {
        Self {
            limit: 10.0,
            gain: 1.0,
            clamp_unit: true,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Offset for a pointer over `bounds`. Zero under reduced motion or when
    /// the geometry is degenerate.
    pub fn offset(&self, pointer: Point, bounds: Bounds, reduced_motion: bool) -> (f64, f64) {
        if reduced_motion {
            return (0.0, 0.0);
        }
        let (rx, ry) = bounds.relative(pointer);
        (self.axis(rx), self.axis(ry))
    }

    fn axis(&self, relative: f64) -> f64 {
        let centred = relative - 0.5;
        let value = if self.clamp_unit {
            centred.clamp(-1.0, 1.0) * self.limit
        } else {
            (centred * self.gain * self.limit).clamp(-self.limit, self.limit)
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

/// Depth for a tile index, cycling through the pattern.
pub fn tile_depth(pattern: &[f64], index: usize) -> f64 {
    if pattern.is_empty() {
        0.0
    } else {
        pattern[index % pattern.len()]
    }
}

/// `translate3d` for a tile at `depth` given the shared offset.
pub fn tile_transform(offset: (f64, f64), depth: f64) -> String {
    format!(
        "transform: translate3d({:.2}px, {:.2}px, 0);",
        offset.0 * depth,
        offset.1 * depth
    )
}

/// Card tilt `(rotate_x, rotate_y)` in degrees for a pointer over `bounds`.
pub fn tilt(pointer: Point, bounds: Bounds) -> (f64, f64) {
    let (rx, ry) = bounds.relative(pointer);
    let rotate_y = ((rx - 0.5) * 2.0 * MAX_TILT).clamp(-MAX_TILT, MAX_TILT);
    let rotate_x = ((0.5 - ry) * 2.0 * MAX_TILT).clamp(-MAX_TILT, MAX_TILT);
    let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
    (finite(rotate_x), finite(rotate_y))
}

/// CSS transform for a tilted card.
pub fn tilt_transform(tilt: (f64, f64)) -> String {
    format!(
        "transform: perspective(1100px) rotateX({:.2}deg) rotateY({:.2}deg);",
        tilt.0, tilt.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Bounds {
        Bounds::new(100.0, 100.0, 200.0, 100.0)
    }

    #[test]
    fn centre_is_neutral() {
        let offset = Parallax::hero().offset(Point::new(200.0, 150.0), card(), false);
        assert_eq!(offset, (0.0, 0.0));
    }

    #[test]
    fn hero_reaches_limit_at_edges() {
        let offset = Parallax::hero().offset(Point::new(300.0, 100.0), card(), false);
        assert_eq!(offset, (14.0, -14.0));
    }

    #[test]
    fn board_scales_without_doubling() {
        let offset = Parallax::board().offset(Point::new(300.0, 200.0), card(), false);
        assert_eq!(offset, (5.0, 5.0));
    }

    #[test]
    fn outside_pointer_is_clamped() {
        let offset = Parallax::hero().offset(Point::new(2000.0, -500.0), card(), false);
        assert_eq!(offset, (14.0, -14.0));
    }

    #[test]
    fn reduced_motion_and_degenerate_bounds_are_zero() {
        let hero = Parallax::hero();
        assert_eq!(hero.offset(Point::new(300.0, 100.0), card(), true), (0.0, 0.0));
        let flat = Bounds::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(hero.offset(Point::new(0.0, 0.0), flat, false), (0.0, 0.0));
    }

    #[test]
    fn depth_pattern_cycles() {
        assert_eq!(tile_depth(&HERO_TILE_DEPTHS, 5), -0.7);
        assert_eq!(tile_depth(&[], 3), 0.0);
    }

    #[test]
    fn tilt_is_bounded() {
        let (rx, ry) = tilt(Point::new(900.0, -900.0), card());
        assert_eq!((rx, ry), (MAX_TILT, MAX_TILT));
        assert_eq!(
            tilt_transform((0.0, 0.0)),
            "transform: perspective(1100px) rotateX(0.00deg) rotateY(0.00deg);"
        );
    }
}
