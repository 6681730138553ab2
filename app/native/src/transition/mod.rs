//! Shared-element transition engine.
//!
//! A thumbnail grows into a fullscreen overlay and shrinks back:
//!
//! - `bounds` - captures a thumbnail's on-screen rectangle
//! - `geometry` - rectangles, viewports, and the overlay transform
//! - `transform` - the pure thumbnail-to-fullscreen transform calculation
//! - `easing`, `spring`, `track` - time curves sampled at any elapsed time
//! - `choreography` - the staggered open and uniform close sequences
//! - `state` - the observable animation parameters
//! - `actor` - the async owner that drives transitions frame by frame

pub mod actor;
pub mod bounds;
pub mod choreography;
pub mod easing;
pub mod geometry;
pub mod spring;
pub mod state;
pub mod track;
pub mod transform;

pub use actor::{
    ActorError, Frame, OpenRequest, TransitionActor, TransitionHandle, TransitionOutcome,
    TransitionSnapshot,
};
pub use bounds::{LayoutElement, capture};
pub use choreography::{Choreography, MotionTimings, TransitionKind};
pub use geometry::{GeometryError, Point, ScreenRect, Size, Transform, Viewport};
pub use state::{AnimationState, MotionValues, TransitionPhase};
pub use transform::calculate_transform;
