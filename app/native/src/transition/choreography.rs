//! Open/close choreography.
//!
//! Builds the four parameter tracks of a transition from the tuning values in
//! [`MotionTimings`]. Opening staggers its tracks for a layered feel:
//!
//! ```text
//! time ──────────────────────────────────────────────▶ open_duration
//! progress        0 ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 1   (ease-out)
//! corner_radius   r ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 0   (ease-out)
//! scrim_alpha     0 ┄┄┄━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 1   (linear, after scrim_delay)
//! scale_overshoot 1 ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄━━━━━━━━┳━━━━━━ 1   (ease-in rise, spring settle)
//!                                               peak
//! ```
//!
//! Closing moves every track straight back to the thumbnail values over the
//! shorter close duration with a single curve.

use std::time::Duration;

use super::spring::SpringParams;
use super::state::MotionValues;
use super::track::{Curve, Track};
use crate::config::{EasingType, MotionConfig, get_config};

// ============================================================================
// Constants
// ============================================================================

/// Minimum transition duration (ms).
pub const MIN_DURATION_MS: u32 = 50;

/// Maximum transition duration (ms).
pub const MAX_DURATION_MS: u32 = 2000;

/// Frame rate bounds for the transition actor.
const MIN_FPS: u32 = 30;
const MAX_FPS: u32 = 240;

/// Largest accepted overshoot factor.
const MAX_OVERSHOOT_FACTOR: f32 = 1.25;

/// Damping ratio bounds for the settle spring.
const MIN_SETTLE_DAMPING_RATIO: f32 = 0.1;
const MAX_SETTLE_DAMPING_RATIO: f32 = 4.0;

// ============================================================================
// Motion Timings
// ============================================================================

/// Runtime timings derived from [`MotionConfig`], with every value validated.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTimings {
    /// When false, open and close snap instead of animating.
    pub enabled: bool,
    pub open_duration: Duration,
    pub close_duration: Duration,
    /// Delay before the scrim starts, never longer than the open duration.
    pub scrim_delay: Duration,
    /// Peak of the settle overshoot, at least 1.0.
    pub overshoot_factor: f32,
    /// Offset at which the overshoot rise starts.
    pub overshoot_start: Duration,
    /// Length of the overshoot rise.
    pub overshoot_rise: Duration,
    pub settle_damping_ratio: f32,
    pub open_easing: EasingType,
    pub close_easing: EasingType,
    /// Time between frames of the transition actor.
    pub frame_interval: Duration,
}

impl Default for MotionTimings {
    fn default() -> Self { Self::from_config(&MotionConfig::default()) }
}

impl MotionTimings {
    /// Builds timings from a motion configuration, clamping out-of-range values.
    #[must_use]
    pub fn from_config(config: &MotionConfig) -> Self {
        let open_duration = clamp_duration(config.open_duration);
        let close_duration = clamp_duration(config.close_duration);
        let scrim_delay = Duration::from_millis(u64::from(config.scrim_delay)).min(open_duration);

        let start_fraction = unit_fraction(config.overshoot_start_fraction);
        let rise_fraction = unit_fraction(config.overshoot_rise_fraction).min(1.0 - start_fraction);
        let overshoot_start = open_duration.mul_f32(start_fraction).min(open_duration);
        let overshoot_rise =
            open_duration.mul_f32(rise_fraction).min(open_duration - overshoot_start);

        let overshoot_factor = if config.overshoot_factor.is_finite() {
            config.overshoot_factor.clamp(1.0, MAX_OVERSHOOT_FACTOR)
        } else {
            1.0
        };

        let settle_damping_ratio = if config.settle_damping_ratio.is_finite() {
            config.settle_damping_ratio.clamp(MIN_SETTLE_DAMPING_RATIO, MAX_SETTLE_DAMPING_RATIO)
        } else {
            1.0
        };

        let fps = config.fps.clamp(MIN_FPS, MAX_FPS);

        Self {
            enabled: config.enabled,
            open_duration,
            close_duration,
            scrim_delay,
            overshoot_factor,
            overshoot_start,
            overshoot_rise,
            settle_damping_ratio,
            open_easing: config.open_easing,
            close_easing: config.close_easing,
            frame_interval: Duration::from_secs(1) / fps,
        }
    }

    /// Builds timings from the global application configuration.
    #[must_use]
    pub fn from_app_config() -> Self { Self::from_config(&get_config().motion) }

    /// Window left for the spring to settle the overshoot back to 1.0.
    #[must_use]
    pub fn settle_window(&self) -> Duration {
        self.open_duration.saturating_sub(self.overshoot_start + self.overshoot_rise)
    }
}

fn clamp_duration(millis: u32) -> Duration {
    Duration::from_millis(u64::from(millis.clamp(MIN_DURATION_MS, MAX_DURATION_MS)))
}

fn unit_fraction(value: f32) -> f32 { if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 } }

// ============================================================================
// Choreography
// ============================================================================

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Thumbnail to fullscreen.
    Open,
    /// Fullscreen back to the thumbnail.
    Close,
}

/// The four tracks of one transition, sampled together.
///
/// Completion is the join of all four tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    kind: TransitionKind,
    progress: Track,
    scale_overshoot: Track,
    scrim_alpha: Track,
    corner_radius: Track,
}

impl Choreography {
    /// Builds the open sequence starting from `from`.
    ///
    /// `from` is the thumbnail state for a fresh open, or whatever values an
    /// interrupted transition left behind.
    #[must_use]
    pub fn open(from: MotionValues, timings: &MotionTimings) -> Self {
        let duration = timings.open_duration;
        let eased = Curve::Eased(timings.open_easing);
        let settle = timings.settle_window();

        let scale_overshoot = Track::starting_at(from.scale_overshoot)
            .hold(timings.overshoot_start)
            .to(timings.overshoot_factor, timings.overshoot_rise, Curve::Eased(EasingType::EaseIn))
            .to(
                1.0,
                settle,
                Curve::Spring(SpringParams::settling_within(settle, timings.settle_damping_ratio)),
            );

        let scrim_alpha = Track::starting_at(from.scrim_alpha).hold(timings.scrim_delay).to(
            1.0,
            duration - timings.scrim_delay,
            Curve::Eased(EasingType::Linear),
        );

        Self {
            kind: TransitionKind::Open,
            progress: Track::starting_at(from.progress).to(1.0, duration, eased),
            scale_overshoot,
            scrim_alpha,
            corner_radius: Track::starting_at(from.corner_radius).to(0.0, duration, eased),
        }
    }

    /// Builds the close sequence from `from` back to the thumbnail state.
    #[must_use]
    pub fn close(from: MotionValues, timings: &MotionTimings, thumbnail_corner_radius: f32) -> Self {
        let duration = timings.close_duration;
        let easing = timings.close_easing;
        let target = MotionValues::thumbnail(thumbnail_corner_radius.max(0.0));

        Self {
            kind: TransitionKind::Close,
            progress: Track::tween(from.progress, target.progress, duration, easing),
            scale_overshoot: Track::tween(
                from.scale_overshoot,
                target.scale_overshoot,
                duration,
                easing,
            ),
            scrim_alpha: Track::tween(from.scrim_alpha, target.scrim_alpha, duration, easing),
            corner_radius: Track::tween(from.corner_radius, target.corner_radius, duration, easing),
        }
    }

    /// Direction of this transition.
    #[must_use]
    pub const fn kind(&self) -> TransitionKind { self.kind }

    /// Values at `elapsed` since the transition started.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> MotionValues {
        MotionValues {
            progress: self.progress.sample(elapsed),
            scale_overshoot: self.scale_overshoot.sample(elapsed),
            scrim_alpha: self.scrim_alpha.sample(elapsed),
            corner_radius: self.corner_radius.sample(elapsed),
        }
        .clamped()
    }

    /// Values once every track has completed.
    #[must_use]
    pub fn target(&self) -> MotionValues {
        MotionValues {
            progress: self.progress.final_value(),
            scale_overshoot: self.scale_overshoot.final_value(),
            scrim_alpha: self.scrim_alpha.final_value(),
            corner_radius: self.corner_radius.final_value(),
        }
        .clamped()
    }

    /// Time until the last track completes.
    #[must_use]
    pub fn duration(&self) -> Duration {
        [&self.progress, &self.scale_overshoot, &self.scrim_alpha, &self.corner_radius]
            .into_iter()
            .map(Track::end)
            .max()
            .unwrap_or_default()
    }

    /// Whether every track has completed at `elapsed`.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool { elapsed >= self.duration() }

    /// Samples the transition every `step`, always including the final frame.
    ///
    /// A zero `step` yields only the first and last frames.
    #[must_use]
    pub fn frames(&self, step: Duration) -> Vec<(Duration, MotionValues)> {
        let duration = self.duration();
        let mut frames = Vec::new();
        let mut elapsed = Duration::ZERO;

        while elapsed < duration {
            frames.push((elapsed, self.sample(elapsed)));
            if step.is_zero() {
                break;
            }
            elapsed += step;
        }
        frames.push((duration, self.sample(duration)));
        frames
    }
}

// ============================================================================
// Tests
// ============================================================================
