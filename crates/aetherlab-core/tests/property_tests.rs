//! Property-based tests for bounded text, mask geometry, the scroll spy and
//! pointer parallax
//!
//! Uses proptest to check the invariants of CharBudget, the mask inset
//! computation, ScrollSpy section picking and Parallax offsets over
//! arbitrary inputs.

use aetherlab_core::mask::distances;
use aetherlab_core::parallax::{tilt, MAX_TILT};
use aetherlab_core::{
    Bounds, CharBudget, MaskReveal, MaskSize, Parallax, Point, ScrollSpy, SectionEntry, Viewport,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary text including multi-byte characters
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("(.|[éü✨🚀])*").expect("valid regex")
}

/// A viewport and a point inside it
fn viewport_and_point() -> impl Strategy<Value = (Viewport, Point)> {
    (1.0f64..4000.0, 1.0f64..4000.0).prop_flat_map(|(w, h)| {
        (Just(Viewport::new(w, h)), 0.0..=w, 0.0..=h)
            .prop_map(|(viewport, x, y)| (viewport, Point::new(x, y)))
    })
}

fn mask_size_strategy() -> impl Strategy<Value = MaskSize> {
    (0.0f64..600.0, 0.0f64..400.0, 0.0f64..64.0).prop_map(|(width, height, radius)| MaskSize {
        width,
        height,
        radius,
    })
}

/// One intersection batch over the home sections, in arbitrary order
fn entries_strategy() -> impl Strategy<Value = Vec<SectionEntry>> {
    let entry = (
        prop::sample::select(vec!["work", "approach", "lab"]),
        -3000.0f64..3000.0,
        any::<bool>(),
    )
        .prop_map(|(id, top, intersecting)| SectionEntry::new(id, top, intersecting));
    prop::collection::vec(entry, 1..8)
}

/// Any box, including zero-sized ones
fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (-500.0f64..500.0, -500.0f64..500.0, 0.0f64..2000.0, 0.0f64..2000.0)
        .prop_map(|(left, top, width, height)| Bounds::new(left, top, width, height))
}

fn pointer_strategy() -> impl Strategy<Value = Point> {
    (-5000.0f64..5000.0, -5000.0f64..5000.0).prop_map(|(x, y)| Point::new(x, y))
}

// ============================================================================
// Bounded Text
// ============================================================================

proptest! {
    /// The stored value is always the first `limit` characters of the input
    #[test]
    fn set_value_truncates_to_limit(limit in 0usize..600, text in text_strategy()) {
        let mut budget = CharBudget::new(limit);
        budget.set_value(&text);

        prop_assert!(budget.count() <= limit);
        let expected: String = text.chars().take(limit).collect();
        prop_assert_eq!(budget.value(), expected.as_str());
        prop_assert_eq!(budget.remaining(), limit - budget.count());
    }

    /// Reset always empties the value, no matter what was typed before
    #[test]
    fn reset_empties(limit in 0usize..600, texts in prop::collection::vec(text_strategy(), 0..5)) {
        let mut budget = CharBudget::new(limit);
        for text in &texts {
            budget.set_value(text);
        }

        budget.reset();
        prop_assert_eq!(budget.count(), 0);
        prop_assert_eq!(budget.value(), "");

        budget.reset();
        prop_assert_eq!(budget.count(), 0);
    }
}

// ============================================================================
// Mask Geometry
// ============================================================================

proptest! {
    /// Insets never go negative or past the viewport
    #[test]
    fn insets_are_bounded((viewport, point) in viewport_and_point(), size in mask_size_strategy()) {
        let insets = distances(point, viewport, size);
        let max = viewport.width.max(viewport.height);

        for value in [insets.top, insets.right, insets.bottom, insets.left] {
            prop_assert!(value >= 0.0);
            prop_assert!(value <= max);
        }
    }

    /// Opposite insets never overlap when the window fits the viewport
    #[test]
    fn opposite_insets_fit((viewport, point) in viewport_and_point(), size in mask_size_strategy()) {
        prop_assume!(size.width <= viewport.width && size.height <= viewport.height);

        let insets = distances(point, viewport, size);
        prop_assert!(insets.left + insets.right <= viewport.width + 1e-9);
        prop_assert!(insets.top + insets.bottom <= viewport.height + 1e-9);
    }

    /// The computation depends only on its inputs
    #[test]
    fn distances_are_idempotent((viewport, point) in viewport_and_point()) {
        let size = MaskSize::default();
        prop_assert_eq!(distances(point, viewport, size), distances(point, viewport, size));
    }

    /// Whatever the pointer does, the stored origin stays inside the viewport
    #[test]
    fn reveal_origin_stays_in_viewport(
        (viewport, _) in viewport_and_point(),
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        shrink in 0.1f64..1.0,
    ) {
        let mut reveal = MaskReveal::new(MaskSize::default(), viewport);
        reveal.update(Point::new(x, y));

        let origin = reveal.origin();
        prop_assert!((0.0..=viewport.width).contains(&origin.x));
        prop_assert!((0.0..=viewport.height).contains(&origin.y));

        let smaller = Viewport::new(viewport.width * shrink, viewport.height * shrink);
        reveal.resize(smaller);
        let origin = reveal.origin();
        prop_assert!(origin.x <= smaller.width);
        prop_assert!(origin.y <= smaller.height);
    }
}

// ============================================================================
// Scroll Spy
// ============================================================================

proptest! {
    /// The active section is the topmost intersecting entry, or the topmost
    /// entry overall when nothing intersects
    #[test]
    fn topmost_intersecting_entry_wins(entries in entries_strategy()) {
        let mut spy = ScrollSpy::new(["work", "approach", "lab"]);
        spy.observe(&entries);

        let intersecting: Vec<&SectionEntry> =
            entries.iter().filter(|entry| entry.is_intersecting).collect();
        let pool: Vec<&SectionEntry> = if intersecting.is_empty() {
            entries.iter().collect()
        } else {
            intersecting
        };
        let min_top = pool.iter().map(|entry| entry.top).fold(f64::INFINITY, f64::min);

        let active = spy.active().expect("a non-empty batch always yields a section");
        prop_assert!(pool
            .iter()
            .any(|entry| entry.id == active && entry.top == min_top));
    }

    /// Feeding the same batch twice never reports a second change
    #[test]
    fn observing_twice_is_idempotent(entries in entries_strategy()) {
        let mut spy = ScrollSpy::new(["work", "approach", "lab"]);
        spy.observe(&entries);
        let active = spy.active().map(str::to_string);

        prop_assert!(!spy.observe(&entries));
        prop_assert_eq!(spy.active().map(str::to_string), active);
    }
}

// ============================================================================
// Parallax
// ============================================================================

proptest! {
    /// Offsets stay finite and within the preset's limit wherever the pointer is
    #[test]
    fn parallax_offset_is_bounded(
        pointer in pointer_strategy(),
        bounds in bounds_strategy(),
        board in any::<bool>(),
    ) {
        let parallax = if board { Parallax::board() } else { Parallax::hero() };
        let (x, y) = parallax.offset(pointer, bounds, false);

        for value in [x, y] {
            prop_assert!(value.is_finite());
            prop_assert!(value.abs() <= parallax.limit());
        }
    }

    /// Reduced motion pins every preset at rest
    #[test]
    fn reduced_motion_parallax_is_still(pointer in pointer_strategy(), bounds in bounds_strategy()) {
        prop_assert_eq!(Parallax::hero().offset(pointer, bounds, true), (0.0, 0.0));
        prop_assert_eq!(Parallax::board().offset(pointer, bounds, true), (0.0, 0.0));
    }

    /// Card tilt never exceeds the maximum angle
    #[test]
    fn tilt_is_bounded(pointer in pointer_strategy(), bounds in bounds_strategy()) {
        let (rotate_x, rotate_y) = tilt(pointer, bounds);
        prop_assert!(rotate_x.abs() <= MAX_TILT);
        prop_assert!(rotate_y.abs() <= MAX_TILT);
    }
}
