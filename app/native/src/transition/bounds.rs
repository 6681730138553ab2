//! Bounds capture for tapped thumbnails.
//!
//! The host hands over its view node through [`LayoutElement`]; [`capture`]
//! turns whatever the node reports into an absolute [`ScreenRect`], or `None`
//! when the position cannot be known. `None` is the normal trigger for the
//! no-bounds fallback, not an error.

use super::geometry::{Point, ScreenRect, Size};

/// A laid-out element as seen by the host UI toolkit.
pub trait LayoutElement {
    /// Whether the element is still part of a live layout tree.
    fn is_attached(&self) -> bool;

    /// Measured size, or `None` before the first layout pass.
    fn size(&self) -> Option<Size>;

    /// Top-left corner relative to the hosting window.
    fn position_in_window(&self) -> Option<Point>;

    /// Offset of the hosting window on screen (status bar, cutouts, insets).
    fn window_offset(&self) -> Point { Point::zero() }
}

/// Captures the on-screen rectangle of `element` at tap time.
///
/// Purely observational. Returns `None` when the element is detached, has
/// not been laid out, or reports geometry that is not a valid rectangle.
pub fn capture<E: LayoutElement + ?Sized>(element: &E) -> Option<ScreenRect> {
    if !element.is_attached() {
        tracing::trace!("transition: bounds capture skipped, element detached");
        return None;
    }

    let size = element.size()?;
    let position = element.position_in_window()?;
    let offset = element.window_offset();

    let origin = Point::new(position.x + offset.x, position.y + offset.y);
    match ScreenRect::from_origin_size(origin, size) {
        Ok(rect) => Some(rect),
        Err(err) => {
            tracing::debug!(error = %err, "transition: discarding invalid captured bounds");
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
