//! Background starfield model.

use std::f64::consts::TAU;

use rand::Rng;

use crate::mask::{Point, Viewport};

const MIN_STARS: usize = 400;
const MAX_STARS: usize = 600;
/// One star per this many square pixels, before clamping
const AREA_PER_STAR: f64 = 3000.0;
/// Peak pointer parallax in pixels
const PARALLAX_STRENGTH: f64 = 6.0;
const TWINKLE_AMPLITUDE: f64 = 55.0;

/// Lavender fill shared by every star
pub const STAR_RGB: (u8, u8, u8) = (198, 183, 255);

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub base_brightness: f64,
    pub phase: f64,
    pub twinkle_speed: f64,
}

impl Star {
    /// Alpha (0-255) at a given frame.
    pub fn alpha(&self, frame: u64, reduced_motion: bool) -> f64 {
        let twinkle = if reduced_motion {
            0.0
        } else {
            let progress = frame as f64 * 0.02 * self.twinkle_speed + self.phase;
            progress.sin() * TWINKLE_AMPLITUDE
        };
        (self.base_brightness + twinkle).clamp(0.0, 255.0)
    }

    /// Seconds for one full twinkle cycle at 45 frames per second.
    pub fn twinkle_period(&self) -> f64 {
        TAU / (0.02 * self.twinkle_speed * 45.0)
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

/// Number of stars for a canvas of the given size.
pub fn star_count(width: f64, height: f64) -> usize {
    let by_area = (width * height / AREA_PER_STAR).floor();
    let by_area = if by_area.is_finite() && by_area > 0.0 {
        by_area as usize
    } else {
        0
    };
    by_area.clamp(MIN_STARS, MAX_STARS)
}

impl Starfield {
    pub fn generate<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        let count = star_count(viewport.width, viewport.height);
        let width = viewport.width.max(1.0);
        let height = viewport.height.max(1.0);

        let stars = (0..count)
            .map(|_| Star {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                size: rng.random_range(0.5..2.5),
                base_brightness: rng.random_range(120.0..200.0),
                phase: rng.random_range(0.0..TAU),
                twinkle_speed: rng.random_range(0.5..1.5),
            })
            .collect();

        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Shared offset applied to every star for the pointer position.
///
/// A pointer at exactly `(0, 0)` is treated as "no pointer yet" and centred.
pub fn pointer_offset(pointer: Option<Point>, viewport: Viewport) -> (f64, f64) {
    let cx = if viewport.width > 0.0 { viewport.width / 2.0 } else { 1.0 };
    let cy = if viewport.height > 0.0 { viewport.height / 2.0 } else { 1.0 };

    let (px, py) = match pointer {
        Some(p) if p.x.is_finite() && p.y.is_finite() && !(p.x == 0.0 && p.y == 0.0) => (p.x, p.y),
        _ => (cx, cy),
    };

    let nx = ((px - cx) / cx).clamp(-1.0, 1.0);
    let ny = ((py - cy) / cy).clamp(-1.0, 1.0);
    (nx * PARALLAX_STRENGTH, ny * PARALLAX_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn count_is_clamped() {
        assert_eq!(star_count(100.0, 100.0), 400);
        assert_eq!(star_count(1600.0, 1000.0), 533);
        assert_eq!(star_count(4000.0, 3000.0), 600);
        assert_eq!(star_count(0.0, 0.0), 400);
    }

    #[test]
    fn generated_stars_stay_in_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = Starfield::generate(Viewport::new(1280.0, 800.0), &mut rng);
        assert!(!field.is_empty());
        for star in field.stars() {
            assert!((0.0..1280.0).contains(&star.x));
            assert!((0.0..800.0).contains(&star.y));
            assert!((0.5..2.5).contains(&star.size));
            assert!((120.0..200.0).contains(&star.base_brightness));
        }
    }

    #[test]
    fn reduced_motion_freezes_twinkle() {
        let star = Star {
            x: 0.0,
            y: 0.0,
            size: 1.0,
            base_brightness: 150.0,
            phase: 1.0,
            twinkle_speed: 1.0,
        };
        assert_eq!(star.alpha(10, true), 150.0);
        assert_ne!(star.alpha(10, false), 150.0);
        assert!(star.alpha(10, false) <= 255.0);
    }

    #[test]
    fn pointer_offset_is_bounded_and_centred_by_default() {
        let viewport = Viewport::new(1000.0, 800.0);
        assert_eq!(pointer_offset(None, viewport), (0.0, 0.0));
        assert_eq!(pointer_offset(Some(Point::new(0.0, 0.0)), viewport), (0.0, 0.0));
        assert_eq!(pointer_offset(Some(Point::new(1000.0, 0.1)), viewport).0, 6.0);
        let far = pointer_offset(Some(Point::new(5000.0, 5000.0)), viewport);
        assert_eq!(far, (6.0, 6.0));
    }
}
