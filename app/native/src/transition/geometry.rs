//! Geometry types shared by the transition engine.
//!
//! All rectangles are expressed in absolute window/screen coordinates,
//! including any system chrome offsets (status bar, cutouts). View-local
//! coordinates must be converted before they reach this module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised when constructing geometry from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A width or height was negative.
    #[error("negative extent: {width}x{height}")]
    NegativeExtent { width: f32, height: f32 },

    /// A coordinate or extent was NaN or infinite.
    #[error("non-finite geometry value")]
    NonFinite,

    /// A viewport dimension was zero or negative.
    #[error("viewport must have positive dimensions, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
}

// ============================================================================
// Point / Size
// ============================================================================

/// A point in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// The origin `(0, 0)`.
    #[must_use]
    pub const fn zero() -> Self { Self::new(0.0, 0.0) }
}

/// A laid-out size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self { Self { width, height } }
}

// ============================================================================
// ScreenRect
// ============================================================================

/// A rectangle in absolute screen coordinates.
///
/// Width and height are never negative. Created once per tap and passed
/// by value for the lifetime of a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Create a rectangle from its origin and extent.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any value is NaN or infinite,
    /// or [`GeometryError::NegativeExtent`] if width or height is negative.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        if ![left, top, width, height].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeExtent { width, height });
        }
        Ok(Self { left, top, width, height })
    }

    /// Create a rectangle from its four edges.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`]; `right < left` or `bottom < top` is a negative extent.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Result<Self, GeometryError> {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Create a rectangle from an origin point and a size.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_origin_size(origin: Point, size: Size) -> Result<Self, GeometryError> {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 { self.left + self.width }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 { self.top + self.height }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point { Point::new(self.left, self.top) }

    /// Extent of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size { Size::new(self.width, self.height) }

    /// Edges as `(left, top, right, bottom)`.
    #[must_use]
    pub fn to_ltrb(&self) -> (f32, f32, f32, f32) {
        (self.left, self.top, self.right(), self.bottom())
    }

    /// Whether the rectangle covers any area.
    #[must_use]
    pub fn has_area(&self) -> bool { self.width > 0.0 && self.height > 0.0 }

    /// Returns this rectangle moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        Self {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..*self
        }
    }

    /// Check if two rectangles are approximately equal (within epsilon).
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.left - other.left).abs() < epsilon
            && (self.top - other.top).abs() < epsilon
            && (self.width - other.width).abs() < epsilon
            && (self.height - other.height).abs() < epsilon
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Measured size of the fullscreen viewer surface.
///
/// A zero viewport is representable because hosts may report one before the
/// surface has been measured; the transform calculator refuses to use it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport without validation.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self { Self { width, height } }

    /// Create a viewport, rejecting empty or non-finite dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyViewport`] or [`GeometryError::NonFinite`].
    pub fn measured(width: f32, height: f32) -> Result<Self, GeometryError> {
        let viewport = Self::new(width, height);
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if !viewport.is_measured() {
            return Err(GeometryError::EmptyViewport { width, height });
        }
        Ok(viewport)
    }

    /// Whether both dimensions are positive and finite.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The full viewport as a rectangle anchored at the origin.
    #[must_use]
    pub const fn as_rect(&self) -> ScreenRect {
        ScreenRect {
            left: 0.0,
            top: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

// ============================================================================
// Transform
// ============================================================================

/// A 2D affine transform for the media surface.
///
/// Scale is applied about `origin` first, then the translation. The origin is
/// always the top-left corner `(0, 0)` for the lifetime of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation_x: f32,
    pub translation_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub origin: Point,
}

impl Transform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self {
        translation_x: 0.0,
        translation_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        origin: Point::zero(),
    };

    /// Rectangle covered by a viewport-sized surface after applying this transform.
    #[must_use]
    pub fn apply(&self, viewport: Viewport) -> ScreenRect {
        ScreenRect {
            left: self.translation_x + self.origin.x * (1.0 - self.scale_x),
            top: self.translation_y + self.origin.y * (1.0 - self.scale_y),
            width: viewport.width * self.scale_x,
            height: viewport.height * self.scale_y,
        }
    }

    /// Row-major affine matrix `[a, b, c, d, tx, ty]` for hosts that take one.
    ///
    /// Maps `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`.
    #[must_use]
    pub fn to_affine(&self) -> [f32; 6] {
        let apply = self.apply(Viewport::new(0.0, 0.0));
        [self.scale_x, 0.0, 0.0, self.scale_y, apply.left, apply.top]
    }

    /// Check if two transforms are approximately equal (within epsilon).
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.translation_x - other.translation_x).abs() < epsilon
            && (self.translation_y - other.translation_y).abs() < epsilon
            && (self.scale_x - other.scale_x).abs() < epsilon
            && (self.scale_y - other.scale_y).abs() < epsilon
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_rect_rejects_negative_extent() {
        let err = ScreenRect::new(0.0, 0.0, -1.0, 10.0).unwrap_err();
        assert!(matches!(err, GeometryError::NegativeExtent { .. }));
    }

    #[test]
    fn test_screen_rect_rejects_nan() {
        assert_eq!(ScreenRect::new(f32::NAN, 0.0, 1.0, 1.0), Err(GeometryError::NonFinite));
    }

    #[test]
    fn test_screen_rect_ltrb_roundtrip() {
        let rect = ScreenRect::from_ltrb(40.0, 200.0, 340.0, 500.0).unwrap();
        assert!((rect.width - 300.0).abs() < f32::EPSILON);
        assert!((rect.height - 300.0).abs() < f32::EPSILON);
        assert_eq!(rect.to_ltrb(), (40.0, 200.0, 340.0, 500.0));
    }

    #[test]
    fn test_screen_rect_from_ltrb_inverted_is_error() {
        assert!(ScreenRect::from_ltrb(100.0, 0.0, 50.0, 10.0).is_err());
    }

    #[test]
    fn test_screen_rect_translated() {
        let rect = ScreenRect::new(10.0, 20.0, 30.0, 40.0).unwrap();
        let moved = rect.translated(Point::new(0.0, 63.0));
        assert!((moved.top - 83.0).abs() < f32::EPSILON);
        assert_eq!(moved.size(), rect.size());
    }

    #[test]
    fn test_viewport_measured() {
        assert!(Viewport::measured(1080.0, 2280.0).is_ok());
        assert!(matches!(
            Viewport::measured(0.0, 2280.0),
            Err(GeometryError::EmptyViewport { .. })
        ));
        assert!(!Viewport::new(1080.0, 0.0).is_measured());
    }

    #[test]
    fn test_identity_transform_covers_viewport() {
        let viewport = Viewport::new(1080.0, 2280.0);
        let rect = Transform::IDENTITY.apply(viewport);
        assert!(rect.approx_eq(&viewport.as_rect(), 1e-4));
    }

    #[test]
    fn test_to_affine_layout() {
        let transform = Transform {
            translation_x: 40.0,
            translation_y: 200.0,
            scale_x: 0.5,
            scale_y: 0.25,
            origin: Point::zero(),
        };
        assert_eq!(transform.to_affine(), [0.5, 0.0, 0.0, 0.25, 40.0, 200.0]);
    }
}
