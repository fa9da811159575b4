//! Easing curves mapping animation progress to value progress.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`.
//! Progress outside `[0, 1]` is clamped first.

use core::f64::consts::FRAC_PI_2;

/// Bisection steps used to invert the spline's x polynomial.
/// 40 halvings take the bracket well below f64 precision needs for pixels.
const SPLINE_SOLVE_STEPS: u32 = 40;

/// Easing curve of a transition.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Symmetric ease-in/ease-out cubic bezier with control points
    /// `(ease, 0)` and `(1 - ease, 1)`. `ease` is clamped to `[0, 1]`.
    Spline(f64),
    /// Quarter sine wave: fast start, soft landing.
    Sine,
}

impl Easing {
    /// Curve of standard value changes.
    pub const STANDARD: Self = Self::Spline(0.5);

    /// Curve of the fall back to zero.
    pub const RETURN_TO_ZERO: Self = Self::Sine;

    /// Map progress `t` to eased progress.
    pub fn apply(
        self,
        t: f64,
    ) -> f64 {
        // NaN progress counts as not started
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        match self {
            Self::Linear => t,
            Self::Sine => libm::sin(t * FRAC_PI_2),
            Self::Spline(ease) => spline(ease, t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self { Self::STANDARD }
}

/// One coordinate of a cubic bezier from `0` to `1` with inner control
/// coordinates `c1` and `c2`.
#[inline]
fn bezier(
    c1: f64,
    c2: f64,
    u: f64,
) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * c1 + 3.0 * inv * u * u * c2 + u * u * u
}

fn spline(
    ease: f64,
    t: f64,
) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let ease = if ease.is_nan() { 0.0 } else { ease.max(0.0).min(1.0) };
    let (x1, x2) = (ease, 1.0 - ease);

    // x(u) is monotonic for control points inside the unit square
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..SPLINE_SOLVE_STEPS {
        let mid = (lo + hi) / 2.0;
        if bezier(x1, x2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(0.0, 1.0, (lo + hi) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::Sine, Easing::Spline(0.5), Easing::Spline(0.0), Easing::Spline(1.0)] {
            assert!(easing.apply(0.0).abs() < EPS, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < EPS, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_linear_midpoint() {
        assert!((Easing::Linear.apply(0.5) - 0.5).abs() < EPS);
        assert!((Easing::Linear.apply(0.25) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_spline_is_symmetric() {
        let e = Easing::STANDARD;
        assert!((e.apply(0.5) - 0.5).abs() < EPS);
        let a = e.apply(0.2);
        let b = e.apply(0.8);
        assert!((a + b - 1.0).abs() < EPS);
        // Eases in: slower than linear at the start
        assert!(a < 0.2);
    }

    #[test]
    fn test_sine_leads_linear() {
        assert!((Easing::Sine.apply(0.5) - libm::sin(FRAC_PI_2 / 2.0)).abs() < EPS);
        assert!(Easing::Sine.apply(0.3) > 0.3);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::Sine, Easing::STANDARD] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let y = easing.apply(f64::from(i) / 100.0);
                assert!(y + EPS >= prev, "{easing:?} decreased at step {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        assert!(Easing::Linear.apply(-1.0).abs() < EPS);
        assert!((Easing::Sine.apply(7.0) - 1.0).abs() < EPS);
        assert!(Easing::STANDARD.apply(f64::NAN).abs() < EPS);
    }
}
