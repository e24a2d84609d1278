//! Auto-advancing process reel.
//!
//! The reel renders its clips twice back to back and slides the track by
//! [`ReelScroller::offset`]. When the offset reaches the end of the scrollable
//! range it wraps to zero.

/// Auto-scroll speed in pixels per second
pub const REEL_SPEED: f64 = 48.0;

/// Smallest manual page step in pixels
const MIN_PAGE_DELTA: f64 = 200.0;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ReelScroller {
    offset: f64,
    paused: bool,
}

impl ReelScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Hover or focus inside the reel pauses it
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Advance by `dt` seconds. `scrollable` is the track width minus the
    /// visible width.
    pub fn step(&mut self, dt: f64, scrollable: f64, reduced_motion: bool) {
        if self.paused || reduced_motion || scrollable <= 0.0 || !dt.is_finite() {
            return;
        }
        let next = self.offset + REEL_SPEED * dt;
        self.offset = if next >= scrollable - 1.0 { 0.0 } else { next };
    }

    /// Jump back one page.
    pub fn prev(&mut self, client_width: f64, scrollable: f64) {
        self.offset = (self.offset - page_delta(client_width)).clamp(0.0, scrollable.max(0.0));
    }

    /// Jump forward one page.
    pub fn next(&mut self, client_width: f64, scrollable: f64) {
        self.offset = (self.offset + page_delta(client_width)).clamp(0.0, scrollable.max(0.0));
    }
}

/// Manual step size for a viewport of `client_width` pixels.
pub fn page_delta(client_width: f64) -> f64 {
    (client_width * 0.8).max(MIN_PAGE_DELTA)
}

/// Clips repeated once so the wrap point is seamless.
pub fn duplicated<T: Clone>(clips: &[T]) -> Vec<T> {
    let mut doubled = Vec::with_capacity(clips.len() * 2);
    doubled.extend_from_slice(clips);
    doubled.extend_from_slice(clips);
    doubled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_wraps() {
        let mut reel = ReelScroller::new();
        reel.step(1.0, 100.0, false);
        assert_eq!(reel.offset(), 48.0);
        reel.step(1.0, 100.0, false);
        assert_eq!(reel.offset(), 96.0);
        reel.step(0.1, 100.0, false);
        assert_eq!(reel.offset(), 0.0);
    }

    #[test]
    fn paused_and_reduced_motion_hold_still() {
        let mut reel = ReelScroller::new();
        reel.set_paused(true);
        reel.step(1.0, 500.0, false);
        assert_eq!(reel.offset(), 0.0);
        reel.set_paused(false);
        reel.step(1.0, 500.0, true);
        assert_eq!(reel.offset(), 0.0);
        reel.step(1.0, 0.0, false);
        assert_eq!(reel.offset(), 0.0);
    }

    #[test]
    fn manual_paging_is_bounded() {
        let mut reel = ReelScroller::new();
        reel.next(100.0, 1000.0);
        assert_eq!(reel.offset(), 200.0);
        reel.next(1000.0, 1000.0);
        assert_eq!(reel.offset(), 1000.0);
        reel.prev(100.0, 1000.0);
        assert_eq!(reel.offset(), 800.0);
        reel.prev(5000.0, 1000.0);
        assert_eq!(reel.offset(), 0.0);
    }

    #[test]
    fn duplicates_in_order() {
        assert_eq!(duplicated(&[1, 2]), vec![1, 2, 1, 2]);
        assert!(duplicated::<u8>(&[]).is_empty());
    }
}
