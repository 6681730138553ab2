//! Spring physics for the overshoot settle.
//!
//! Uses the analytical solution of the damped harmonic oscillator
//! ```text
//! x''(t) + 2ζω₀x'(t) + ω₀²x(t) = ω₀²
//! ```
//! starting at rest at 0 and converging on 1, where ζ is the damping ratio
//! (below 1.0 the spring bounces) and ω₀ the natural frequency.

use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Settling time multiplier for critically damped and overdamped springs
/// ((1 + 7)e^-7 leaves 0.73% of the travel).
const CRITICALLY_DAMPED_SETTLE_FACTOR: f32 = 7.0;

/// Envelope decay multiplier for underdamped springs (e^-6 leaves a 0.25% envelope).
const UNDERDAMPED_SETTLE_FACTOR: f32 = 6.0;

/// Smallest damping ratio accepted; lower values never visibly settle.
const MIN_DAMPING_RATIO: f32 = 0.05;

/// Smallest settle window considered (seconds).
const MIN_SETTLE_SECS: f32 = 0.01;

// ============================================================================
// Spring Physics
// ============================================================================

/// Spring physics parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub omega_0: f32,
    pub damping_ratio: f32,
}

impl SpringParams {
    /// Creates spring parameters that settle within `duration`.
    #[must_use]
    pub fn settling_within(duration: Duration, damping_ratio: f32) -> Self {
        let secs = duration.as_secs_f32().max(MIN_SETTLE_SECS);
        let damping_ratio =
            if damping_ratio.is_finite() { damping_ratio.max(MIN_DAMPING_RATIO) } else { 1.0 };

        let omega_0 = if damping_ratio < 1.0 {
            UNDERDAMPED_SETTLE_FACTOR / (damping_ratio * secs)
        } else {
            // The slow pole decays at ω₀(ζ - √(ζ² - 1)), which is 1 at ζ = 1.
            CRITICALLY_DAMPED_SETTLE_FACTOR / (slow_pole_rate(damping_ratio) * secs)
        };

        Self { omega_0, damping_ratio }
    }

    /// Calculates the spring position at `t` seconds.
    #[must_use]
    pub fn position(&self, t: f32) -> f32 {
        let zeta = self.damping_ratio;

        if zeta < 1.0 {
            underdamped_position(t, self.omega_0, zeta)
        } else if (zeta - 1.0).abs() < 0.001 {
            critically_damped_position(t, self.omega_0)
        } else {
            overdamped_position(t, self.omega_0, zeta)
        }
    }
}

/// `ζ - √(ζ² - 1)` for ζ ≥ 1, written as its reciprocal to avoid cancellation.
#[inline]
fn slow_pole_rate(zeta: f32) -> f32 { 1.0 / (zeta + zeta.mul_add(zeta, -1.0).max(0.0).sqrt()) }

/// Position for an underdamped spring (ζ < 1).
#[inline]
fn underdamped_position(t: f32, omega_0: f32, zeta: f32) -> f32 {
    let zeta_sq_complement = zeta.mul_add(-zeta, 1.0);
    let omega_d = omega_0 * zeta_sq_complement.sqrt();
    let decay = (-zeta * omega_0 * t).exp();
    let cos_term = (omega_d * t).cos();
    let sin_term = (zeta / zeta_sq_complement.sqrt()) * (omega_d * t).sin();

    decay.mul_add(-(cos_term + sin_term), 1.0)
}

/// Position for a critically damped spring (ζ = 1).
#[inline]
fn critically_damped_position(t: f32, omega_0: f32) -> f32 {
    let decay = (-omega_0 * t).exp();
    decay.mul_add(-omega_0.mul_add(t, 1.0), 1.0)
}

/// Position for an overdamped spring (ζ > 1).
///
/// Sum of the two real poles' decays, both of which only shrink with `t`.
#[inline]
fn overdamped_position(t: f32, omega_0: f32, zeta: f32) -> f32 {
    let slow = omega_0 * slow_pole_rate(zeta);
    let fast = omega_0 * omega_0 / slow;
    let residual = fast.mul_add((-slow * t).exp(), -slow * (-fast * t).exp()) / (fast - slow);

    1.0 - residual
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_starts_at_rest() {
        for zeta in [0.5, 0.75, 1.0, 1.5] {
            let spring = SpringParams::settling_within(Duration::from_millis(70), zeta);
            assert!(spring.position(0.0).abs() < 1e-5, "zeta {zeta}");
        }
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let spring = SpringParams::settling_within(Duration::from_millis(70), 0.75);
        let peak = (0..=70u8)
            .map(|ms| spring.position(f32::from(ms) / 1000.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
        assert!(peak < 1.05);
    }

    #[test]
    fn test_critically_damped_does_not_overshoot() {
        let spring = SpringParams::settling_within(Duration::from_millis(200), 1.0);
        for ms in 0..=400u16 {
            assert!(spring.position(f32::from(ms) / 1000.0) <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_spring_settles_within_duration() {
        for zeta in [0.5, 0.75, 1.0, 1.01, 2.0, 20.0] {
            let spring = SpringParams::settling_within(Duration::from_millis(100), zeta);
            let position = spring.position(0.1);
            assert!((position - 1.0).abs() < 0.01, "zeta {zeta} at end of window: {position}");
        }
    }

    #[test]
    fn test_overdamped_converges() {
        let spring = SpringParams::settling_within(Duration::from_millis(100), 2.0);
        assert!(spring.position(0.05) > 0.0);
        assert!(spring.position(0.1) > 0.99);
        assert!((spring.position(1.0) - 1.0).abs() < 1e-4);
        assert!((spring.position(10.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_overdamped_is_monotonic_and_finite() {
        for zeta in [1.5, 4.0, 60.0] {
            let spring = SpringParams::settling_within(Duration::from_millis(70), zeta);
            let mut previous = 0.0_f32;
            for ms in 0..=1000u16 {
                let position = spring.position(f32::from(ms) / 1000.0);
                assert!(position.is_finite(), "zeta {zeta} at {ms}ms");
                assert!(position >= previous - 1e-6, "zeta {zeta} at {ms}ms");
                assert!(position <= 1.0 + 1e-6, "zeta {zeta} at {ms}ms");
                previous = position;
            }
        }
    }

    #[test]
    fn test_invalid_damping_ratio_is_sanitized() {
        let spring = SpringParams::settling_within(Duration::from_millis(100), f32::NAN);
        assert!((spring.damping_ratio - 1.0).abs() < f32::EPSILON);

        let spring = SpringParams::settling_within(Duration::from_millis(100), 0.0);
        assert!(spring.damping_ratio >= MIN_DAMPING_RATIO);
    }
}
