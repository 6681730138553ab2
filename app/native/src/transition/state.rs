//! Animation state owned by a viewer overlay.
//!
//! Holds the four interpolated parameters and the derived `is_animating`
//! flag. Both are `eyeball` observables so rendering hosts can subscribe to
//! changes instead of polling.

use eyeball::{Observable, Subscriber};
use serde::{Deserialize, Serialize};

// ============================================================================
// Motion Values
// ============================================================================

/// Snapshot of the four animated parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionValues {
    /// 0 = at the thumbnail, 1 = fullscreen.
    pub progress: f32,
    /// Transient scale multiplier, 1.0 at rest.
    pub scale_overshoot: f32,
    /// Background dimming alpha.
    pub scrim_alpha: f32,
    /// Clip corner radius, same unit as the bounds.
    pub corner_radius: f32,
}

impl MotionValues {
    /// Fullscreen terminal values.
    pub const FULLSCREEN: Self = Self {
        progress: 1.0,
        scale_overshoot: 1.0,
        scrim_alpha: 1.0,
        corner_radius: 0.0,
    };

    /// Values that place the surface exactly over a thumbnail.
    #[must_use]
    pub const fn thumbnail(corner_radius: f32) -> Self {
        Self {
            progress: 0.0,
            scale_overshoot: 1.0,
            scrim_alpha: 0.0,
            corner_radius,
        }
    }

    /// Returns these values forced into their documented ranges.
    ///
    /// NaN collapses to the thumbnail end of each range.
    #[must_use]
    pub fn clamped(self) -> Self {
        let unit = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            progress: unit(self.progress),
            scale_overshoot: if self.scale_overshoot.is_finite() {
                self.scale_overshoot.max(0.0)
            } else {
                1.0
            },
            scrim_alpha: unit(self.scrim_alpha),
            corner_radius: if self.corner_radius.is_finite() {
                self.corner_radius.max(0.0)
            } else {
                0.0
            },
        }
    }

    /// Whether every field lies in its documented range.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.progress)
            && (0.0..=1.0).contains(&self.scrim_alpha)
            && self.corner_radius >= 0.0
            && self.scale_overshoot.is_finite()
            && self.scale_overshoot > 0.0
    }

    /// Check if two snapshots are approximately equal (within epsilon).
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.progress - other.progress).abs() < epsilon
            && (self.scale_overshoot - other.scale_overshoot).abs() < epsilon
            && (self.scrim_alpha - other.scrim_alpha).abs() < epsilon
            && (self.corner_radius - other.corner_radius).abs() < epsilon
    }
}

// ============================================================================
// Phase
// ============================================================================

/// Lifecycle of an overlay transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPhase {
    /// At the thumbnail (or not shown).
    #[default]
    Idle,
    /// Growing toward fullscreen.
    Opening,
    /// Fullscreen, waiting for a close request.
    Open,
    /// Shrinking back toward the thumbnail.
    Closing,
}

impl TransitionPhase {
    /// Whether a sequence is running in this phase.
    #[must_use]
    pub const fn is_transitioning(self) -> bool { matches!(self, Self::Opening | Self::Closing) }

    /// Phase reached once the running sequence completes.
    #[must_use]
    pub const fn settled(self) -> Self {
        match self {
            Self::Opening | Self::Open => Self::Open,
            Self::Closing | Self::Idle => Self::Idle,
        }
    }
}

// ============================================================================
// Animation State
// ============================================================================

/// Observable container for one overlay's motion values.
///
/// Owned exclusively by the component driving the transition.
pub struct AnimationState {
    values: Observable<MotionValues>,
    animating: Observable<bool>,
}

impl std::fmt::Debug for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationState")
            .field("values", &self.values())
            .field("is_animating", &self.is_animating())
            .finish()
    }
}

impl Default for AnimationState {
    fn default() -> Self { Self::new(MotionValues::thumbnail(0.0)) }
}

impl AnimationState {
    /// Create a state holding `initial`, not animating.
    #[must_use]
    pub fn new(initial: MotionValues) -> Self {
        Self {
            values: Observable::new(initial.clamped()),
            animating: Observable::new(false),
        }
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> MotionValues { *Observable::get(&self.values) }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool { *Observable::get(&self.animating) }

    /// Sets all four fields immediately, without interpolation.
    pub fn snap_to(
        &mut self,
        progress: f32,
        scale_overshoot: f32,
        scrim_alpha: f32,
        corner_radius: f32,
    ) {
        self.apply(MotionValues {
            progress,
            scale_overshoot,
            scrim_alpha,
            corner_radius,
        });
    }

    /// Sets every field to the fullscreen values in one step.
    ///
    /// Used when there are no bounds to grow from. Never marks the state as
    /// animating.
    pub fn snap_to_fullscreen(&mut self) { self.apply(MotionValues::FULLSCREEN); }

    /// Publishes a new set of values, clamped into range.
    pub fn apply(&mut self, values: MotionValues) {
        Observable::set_if_not_eq(&mut self.values, values.clamped());
    }

    /// Updates the running flag.
    pub(crate) fn set_animating(&mut self, animating: bool) {
        Observable::set_if_not_eq(&mut self.animating, animating);
    }

    /// Subscribe to value changes.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<MotionValues> { Observable::subscribe(&self.values) }

    /// Subscribe to the running flag.
    #[must_use]
    pub fn subscribe_animating(&self) -> Subscriber<bool> { Observable::subscribe(&self.animating) }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_sets_all_fields() {
        let mut state = AnimationState::default();
        state.snap_to(0.25, 1.01, 0.5, 6.0);
        let values = state.values();
        assert!((values.progress - 0.25).abs() < f32::EPSILON);
        assert!((values.scale_overshoot - 1.01).abs() < f32::EPSILON);
        assert!((values.scrim_alpha - 0.5).abs() < f32::EPSILON);
        assert!((values.corner_radius - 6.0).abs() < f32::EPSILON);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_snap_to_fullscreen() {
        let mut state = AnimationState::new(MotionValues::thumbnail(12.0));
        let mut animating = state.subscribe_animating();
        state.snap_to_fullscreen();

        assert_eq!(state.values(), MotionValues::FULLSCREEN);
        assert!(!state.is_animating());
        assert!(!animating.next_now());
    }

    #[test]
    fn test_values_are_clamped() {
        let mut state = AnimationState::default();
        state.snap_to(1.5, f32::NAN, -0.2, -4.0);
        let values = state.values();
        assert!((values.progress - 1.0).abs() < f32::EPSILON);
        assert!((values.scale_overshoot - 1.0).abs() < f32::EPSILON);
        assert!(values.scrim_alpha.abs() < f32::EPSILON);
        assert!(values.corner_radius.abs() < f32::EPSILON);
        assert!(values.is_in_range());
    }

    #[test]
    fn test_subscriber_sees_latest_values() {
        let mut state = AnimationState::default();
        let subscriber = state.subscribe();
        state.snap_to(0.5, 1.0, 0.5, 3.0);
        assert!((subscriber.get().progress - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_phase_transitions() {
        assert!(TransitionPhase::Opening.is_transitioning());
        assert!(!TransitionPhase::Open.is_transitioning());
        assert_eq!(TransitionPhase::Opening.settled(), TransitionPhase::Open);
        assert_eq!(TransitionPhase::Closing.settled(), TransitionPhase::Idle);
    }

    #[test]
    fn test_thumbnail_values() {
        let values = MotionValues::thumbnail(12.0);
        assert!(values.progress.abs() < f32::EPSILON);
        assert!((values.scale_overshoot - 1.0).abs() < f32::EPSILON);
        assert!(values.scrim_alpha.abs() < f32::EPSILON);
        assert!((values.corner_radius - 12.0).abs() < f32::EPSILON);
    }
}
