//! Easing functions for time-based curves.
//!
//! Provides the standard curves (linear, ease-in, ease-out, ease-in-out,
//! exponential ease-out) plus a cubic bezier solver for the Material
//! fast-out-slow-in curve. Every curve maps `[0, 1]` onto `[0, 1]` with
//! exact endpoints.

use crate::config::EasingType;

// ============================================================================
// Easing Functions
// ============================================================================

/// Linear interpolation between two values.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 { (end - start).mul_add(t, start) }

/// Linear easing (no acceleration).
#[inline]
#[must_use]
pub const fn ease_linear(t: f32) -> f32 { t }

/// Ease-in (slow start, accelerates).
#[inline]
#[must_use]
pub fn ease_in(t: f32) -> f32 { t * t * t }

/// Ease-out (fast start, decelerates).
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t1 = t - 1.0;
    (t1 * t1).mul_add(t1, 1.0)
}

/// Ease-in-out (slow start and end).
#[inline]
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t1 = 2.0f32.mul_add(t, -2.0);
        (0.5 * t1 * t1).mul_add(t1, 1.0)
    }
}

/// Exponential ease-out.
#[inline]
#[must_use]
pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 { 1.0 } else { 1.0 - 2.0f32.powf(-10.0 * t) }
}

// ============================================================================
// Cubic Bezier
// ============================================================================

/// Newton iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;

/// Bisection iterations (enough for f32 precision).
const BISECTION_ITERATIONS: usize = 24;

/// Acceptable error when solving for the curve parameter.
const SOLVE_EPSILON: f32 = 1e-6;

/// A CSS-style cubic bezier easing curve with fixed endpoints `(0,0)` and `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Material "standard" curve.
    pub const FAST_OUT_SLOW_IN: Self = Self::new(0.4, 0.0, 0.2, 1.0);

    /// Create a curve from its two control points.
    ///
    /// `x1` and `x2` are expected in `[0, 1]` so the curve is a function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self { Self { x1, y1, x2, y2 } }

    fn coordinate(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn coordinate_derivative(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Solves for the curve parameter whose x coordinate equals `x`.
    fn solve_parameter(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::coordinate(t, self.x1, self.x2) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = Self::coordinate_derivative(t, self.x1, self.x2);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::coordinate(t, self.x1, self.x2);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) * 0.5;
        }
        t
    }

    /// Evaluates the curve at normalized time `x`.
    #[must_use]
    pub fn transform(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::coordinate(self.solve_parameter(x), self.y1, self.y2)
    }
}

/// Applies an easing function based on the easing type.
#[inline]
#[must_use]
pub fn apply_easing(t: f32, easing: EasingType) -> f32 {
    match easing {
        EasingType::Linear => ease_linear(t),
        EasingType::EaseIn => ease_in(t),
        EasingType::EaseOut => ease_out(t),
        EasingType::EaseInOut => ease_in_out(t),
        EasingType::EaseOutExpo => ease_out_expo(t),
        EasingType::FastOutSlowIn => CubicBezier::FAST_OUT_SLOW_IN.transform(t),
    }
}

// ============================================================================
// Tests
// ============================================================================
