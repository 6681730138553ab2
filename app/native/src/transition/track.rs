//! Time-based interpolation tracks.
//!
//! A [`Track`] is one parameter's curve over a transition: a contiguous list
//! of [`Segment`]s, each interpolating between two values with an easing
//! curve or a spring. Tracks are sampled by elapsed time measured from the
//! transition's own start, so delays are frame-clock relative.
//!
//! Invariants:
//! 1. Segments are ordered and never overlap.
//! 2. Before the first segment starts the track holds its first `from` value.
//! 3. Once the last segment ends the track holds its last `to` value exactly.
//! 4. Normalized segment time is clamped to `[0, 1]`.

use std::time::Duration;

use smallvec::SmallVec;

use super::easing::{apply_easing, lerp};
use super::spring::SpringParams;
use crate::config::EasingType;

// ============================================================================
// Curve / Segment
// ============================================================================

/// How a segment moves from its start value to its end value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Duration-based easing curve.
    Eased(EasingType),
    /// Spring physics, landing exactly on the end value when the window closes.
    Spring(SpringParams),
}

/// One interpolation window of a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start time relative to the transition start.
    pub offset: Duration,
    /// Length of the window.
    pub duration: Duration,
    pub from: f32,
    pub to: f32,
    pub curve: Curve,
}

impl Segment {
    /// End time relative to the transition start.
    #[must_use]
    pub fn end(&self) -> Duration { self.offset + self.duration }

    /// Normalized time within this segment, clamped to `[0, 1]`.
    #[must_use]
    pub fn normalized_time(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return if elapsed >= self.offset { 1.0 } else { 0.0 };
        }
        let local = elapsed.saturating_sub(self.offset);
        (local.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Value of this segment at `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let t = self.normalized_time(elapsed);
        if t >= 1.0 {
            return self.to;
        }

        match self.curve {
            Curve::Eased(easing) => lerp(self.from, self.to, apply_easing(t, easing)),
            Curve::Spring(spring) => {
                let local = elapsed.saturating_sub(self.offset).as_secs_f32();
                lerp(self.from, self.to, spring.position(local))
            }
        }
    }
}

// ============================================================================
// Track
// ============================================================================

/// A single parameter's curve over one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    initial: f32,
    /// Start of the next appended segment.
    cursor: Duration,
    segments: SmallVec<[Segment; 3]>,
}

impl Track {
    /// A track that holds `value` and completes immediately.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self {
            initial: value,
            cursor: Duration::ZERO,
            segments: SmallVec::new(),
        }
    }

    /// A track starting at `value`; segments are appended with [`Self::to`].
    #[must_use]
    pub fn starting_at(value: f32) -> Self { Self::constant(value) }

    /// A single eased tween.
    #[must_use]
    pub fn tween(from: f32, to: f32, duration: Duration, easing: EasingType) -> Self {
        Self::starting_at(from).to(to, duration, Curve::Eased(easing))
    }

    /// Holds the current end value for `duration` before the next segment.
    #[must_use]
    pub fn hold(mut self, duration: Duration) -> Self {
        self.cursor += duration;
        self
    }

    /// Appends a segment moving from the current end value to `to`.
    #[must_use]
    pub fn to(mut self, to: f32, duration: Duration, curve: Curve) -> Self {
        let segment = Segment {
            offset: self.cursor,
            duration,
            from: self.final_value(),
            to,
            curve,
        };
        self.cursor = segment.end();
        self.segments.push(segment);
        self
    }

    /// Value held before any segment starts.
    #[must_use]
    pub const fn initial_value(&self) -> f32 { self.initial }

    /// Value held once the track completes.
    #[must_use]
    pub fn final_value(&self) -> f32 { self.segments.last().map_or(self.initial, |s| s.to) }

    /// Time at which the last segment ends.
    #[must_use]
    pub fn end(&self) -> Duration { self.segments.last().map_or(Duration::ZERO, Segment::end) }

    /// Whether the track has reached its final value at `elapsed`.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool { elapsed >= self.end() }

    /// Segments of this track in time order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Value of the track at `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let mut value = self.initial;
        for segment in &self.segments {
            if elapsed < segment.offset {
                return value;
            }
            if elapsed < segment.end() {
                return segment.sample(elapsed);
            }
            value = segment.to;
        }
        value
    }
}

// ============================================================================
// Tests
// ============================================================================
