//! Orientation geometry and spin resolution.
//!
//! Angles are degrees measured clockwise from the top of the wheel. Slice `i`
//! of `n` occupies `[i * 360/n, (i + 1) * 360/n)`. The pointer sits at a fixed
//! angle, and a wheel rotated by `orientation` degrees has the slice at
//! `POINTER_ANGLE - orientation` underneath it.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Angle of the fixed pointer: the right side of the wheel.
pub const POINTER_ANGLE: f64 = 90.0;

/// The result of resolving a spin request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinResolution {
    /// The slice the spin will land on.
    pub index: usize,
    /// Forward rotation to add to the current orientation, in degrees.
    pub delta: f64,
}

/// Normalize an angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let angle = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Angular width of one slice, or `None` for an empty wheel.
pub fn slice_width(n: usize) -> Option<f64> {
    (n > 0).then(|| 360.0 / n as f64)
}

/// Angle of the midpoint of slice `index` on an `n`-slice wheel.
pub fn slice_midpoint(index: usize, n: usize) -> Option<f64> {
    let width = slice_width(n)?;
    Some(index as f64 * width + width / 2.0)
}

/// Compute the forward rotation that brings slice `index` under the pointer.
///
/// The result is `spins` full turns plus the minimal non-negative rotation
/// from `current_orientation` to the orientation that centers the slice on
/// the pointer. The extra turns never change the resting slice. Returns
/// `None` when `n == 0` or `index` is out of range.
pub fn spin_delta(n: usize, index: usize, current_orientation: f64, spins: u32) -> Option<f64> {
    if index >= n {
        return None;
    }
    let mid = slice_midpoint(index, n)?;
    let current = normalize_degrees(current_orientation);
    let needed = normalize_degrees(POINTER_ANGLE - mid);
    let delta_to_target = normalize_degrees(needed - current);
    Some(f64::from(spins) * 360.0 + delta_to_target)
}

/// Pick a winning slice and the rotation that lands on it.
///
/// A `target` inside `[0, n)` is used as-is. Anything else, including no
/// target at all, falls back to a uniform draw over the `n` slices. An empty
/// wheel cannot spin and yields `None`.
pub fn resolve_spin(
    n: usize,
    target: Option<usize>,
    current_orientation: f64,
    spins: u32,
    rng: &mut StdRng,
) -> Option<SpinResolution> {
    if n == 0 {
        return None;
    }
    let index = match target {
        Some(t) if t < n => t,
        _ => rng.random_range(0..n),
    };
    let delta = spin_delta(n, index, current_orientation, spins)?;
    Some(SpinResolution { index, delta })
}

/// The slice sitting under the pointer at `orientation`.
///
/// Returns `None` for an empty wheel. This is the exact inverse of
/// [`spin_delta`]: applying a resolved delta and asking for the index here
/// recovers the resolved slice.
pub fn index_at_orientation(orientation: f64, n: usize) -> Option<usize> {
    let width = slice_width(n)?;
    let rotation = normalize_degrees(orientation);
    let a = normalize_degrees(POINTER_ANGLE - rotation);
    Some((a / width).floor() as usize % n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn four_slices_from_rest() {
        // slice 2 midpoint is 225, so the wheel must sit at 225 degrees
        let delta = spin_delta(4, 2, 0.0, 6).unwrap();
        assert!((delta - 2385.0).abs() < 1e-9);
        assert_eq!(normalize_degrees(delta), 225.0);
        assert_eq!(index_at_orientation(225.0, 4), Some(2));
        assert_eq!(index_at_orientation(delta, 4), Some(2));
    }

    #[test]
    fn delta_is_never_backward() {
        // already aligned: only the full turns remain
        let delta = spin_delta(4, 2, 225.0, 6).unwrap();
        assert!((delta - 2160.0).abs() < 1e-9);
        let delta = spin_delta(4, 2, 226.0, 0).unwrap();
        assert!((delta - 359.0).abs() < 1e-9);
    }

    #[test]
    fn spin_delta_rejects_bad_input() {
        assert_eq!(spin_delta(0, 0, 0.0, 6), None);
        assert_eq!(spin_delta(3, 3, 0.0, 6), None);
    }

    #[test]
    fn empty_wheel_has_no_selection() {
        assert_eq!(index_at_orientation(123.0, 0), None);
        assert_eq!(slice_width(0), None);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(resolve_spin(0, Some(0), 0.0, 6, &mut rng), None);
    }

    #[test]
    fn valid_target_is_used_verbatim() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let r = resolve_spin(8, Some(5), 42.0, 6, &mut rng).unwrap();
            assert_eq!(r.index, 5);
        }
    }

    #[test]
    fn out_of_range_target_falls_back_to_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let r = resolve_spin(3, Some(3), 0.0, 6, &mut rng).unwrap();
            assert!(r.index < 3);
            assert_eq!(index_at_orientation(r.delta, 3), Some(r.index));
        }
    }

    #[test]
    fn single_slice_always_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let r = resolve_spin(1, None, 17.5, 6, &mut rng).unwrap();
        assert_eq!(r.index, 0);
        assert_eq!(index_at_orientation(17.5 + r.delta, 1), Some(0));
    }

    #[test]
    fn random_mode_is_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 6;
        let trials = 60_000;
        let mut counts = vec![0usize; n];
        for _ in 0..trials {
            let r = resolve_spin(n, None, 0.0, 6, &mut rng).unwrap();
            counts[r.index] += 1;
        }
        let expected = 1.0 / n as f64;
        for count in counts {
            let freq = count as f64 / trials as f64;
            assert!(
                (freq - expected).abs() < 0.01,
                "frequency {freq} too far from {expected}"
            );
        }
    }

    proptest! {
        #[test]
        fn resolved_delta_lands_on_index(
            n in 1usize..64,
            pick in 0usize..1000,
            orientation in -1.0e6f64..1.0e6,
            spins in 0u32..10,
        ) {
            let index = pick % n;
            let delta = spin_delta(n, index, orientation, spins).unwrap();
            prop_assert!(delta >= f64::from(spins) * 360.0);
            prop_assert!(delta <= f64::from(spins + 1) * 360.0);
            prop_assert_eq!(index_at_orientation(orientation + delta, n), Some(index));
        }

        #[test]
        fn index_is_always_in_range(n in 1usize..200, orientation in -1.0e9f64..1.0e9) {
            let index = index_at_orientation(orientation, n).unwrap();
            prop_assert!(index < n);
        }

        #[test]
        fn index_ignores_full_turns(
            n in 1usize..64,
            orientation in -1.0e4f64..1.0e4,
            k in -50i32..50,
        ) {
            // keep clear of slice boundaries, where a full turn can flip the
            // floor through rounding
            let width = 360.0 / n as f64;
            let a = normalize_degrees(POINTER_ANGLE - normalize_degrees(orientation));
            let offset = a % width;
            prop_assume!(offset > 1e-6 && width - offset > 1e-6);
            prop_assert_eq!(
                index_at_orientation(orientation, n),
                index_at_orientation(orientation + 360.0 * f64::from(k), n)
            );
        }

        #[test]
        fn spin_delta_is_deterministic(
            n in 1usize..64,
            pick in 0usize..1000,
            orientation in -1.0e6f64..1.0e6,
        ) {
            let index = pick % n;
            prop_assert_eq!(
                spin_delta(n, index, orientation, 6),
                spin_delta(n, index, orientation, 6)
            );
        }
    }
}
