//! Transform calculator.
//!
//! Maps a thumbnail rectangle, the fullscreen viewport, the open progress and
//! the transient scale overshoot onto the transform for the media surface.
//! Scaling is anchored at the top-left corner, so translating to `(0, 0)` at
//! full progress fills the viewport exactly once scale reaches 1.

use super::easing::lerp;
use super::geometry::{Point, ScreenRect, Transform, Viewport};

/// Computes the surface transform for one frame.
///
/// Returns `None` when the viewport has not been measured (zero or non-finite
/// dimensions); callers snap instead of animating in that case. `progress`
/// is clamped to `[0, 1]`.
#[must_use]
pub fn calculate_transform(
    bounds: ScreenRect,
    viewport: Viewport,
    progress: f32,
    scale_multiplier: f32,
) -> Option<Transform> {
    if !viewport.is_measured() || !scale_multiplier.is_finite() {
        return None;
    }
    let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

    let start_scale_x = bounds.width / viewport.width;
    let start_scale_y = bounds.height / viewport.height;
    let end_scale = scale_multiplier;

    Some(Transform {
        translation_x: lerp(bounds.left, 0.0, t),
        translation_y: lerp(bounds.top, 0.0, t),
        scale_x: lerp(start_scale_x, end_scale, t),
        scale_y: lerp(start_scale_y, end_scale, t),
        origin: Point::zero(),
    })
}

// ============================================================================
// Tests
// ============================================================================
