//! Gallery Motion - shared-element thumbnail-to-fullscreen transitions.
//!
//! The library captures a thumbnail's bounds, animates an overlay from those
//! bounds to fullscreen and back, and publishes every frame through `eyeball`
//! observables. The bundled CLI samples and previews transitions without a
//! rendering host.

pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod transition;

pub use error::MotionError;
pub use transition::{
    AnimationState, MotionTimings, MotionValues, OpenRequest, ScreenRect, Transform,
    TransitionActor, TransitionHandle, TransitionOutcome, TransitionPhase, Viewport,
    calculate_transform,
};
