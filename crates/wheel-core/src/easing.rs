//! Cubic Bézier easing for the spin animation.
//!
//! A curve is defined by two control points, with the end points pinned at
//! `(0, 0)` and `(1, 1)`. The x axis is elapsed time and the y axis is the
//! fraction of the rotation completed.

/// A cubic Bézier timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Fast start, long gentle stop.
pub const SPIN_EASING: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 40;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// Create a curve from its two control points. Both x coordinates must
    /// lie in `[0, 1]` for the curve to be a function of time.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    fn slope(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    /// Solve for the curve parameter whose x equals `t`.
    fn solve_parameter(&self, t: f64) -> f64 {
        let mut s = t;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, s) - t;
            if err.abs() < EPSILON {
                return s;
            }
            let d = Self::slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = t;
        for _ in 0..BISECTION_ITERATIONS {
            let x = Self::sample(self.x1, self.x2, s);
            if (x - t).abs() < EPSILON {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// Progress along the curve at time fraction `t` (clamped to `[0, 1]`).
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_parameter(t);
        Self::sample(self.y1, self.y2, s)
    }
}
