//! Message types for the transition actor.
//!
//! - `TransitionMessage` - requests sent to the actor
//! - `TransitionQuery` - requests for state data (with response channel)
//! - `QueryResult` - responses from queries
//! - `Frame` - what the actor publishes after every step

use eyeball::Subscriber;
use serde::Serialize;
use tokio::sync::oneshot;

use crate::transition::geometry::{ScreenRect, Transform, Viewport};
use crate::transition::state::{MotionValues, TransitionPhase};

// ============================================================================
// Requests
// ============================================================================

/// Inputs captured when the user taps a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenRequest {
    /// Thumbnail bounds, `None` when they could not be captured.
    pub bounds: Option<ScreenRect>,
    /// Size of the fullscreen surface.
    pub viewport: Viewport,
    /// Corner radius of the thumbnail, restored on close.
    pub thumbnail_corner_radius: f32,
}

impl OpenRequest {
    #[must_use]
    pub const fn new(
        bounds: Option<ScreenRect>,
        viewport: Viewport,
        thumbnail_corner_radius: f32,
    ) -> Self {
        Self { bounds, viewport, thumbnail_corner_radius }
    }
}

/// How an open or close request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionOutcome {
    /// Every sub-animation ran to completion.
    Completed,
    /// The end state was applied in one step (fallback or reduced motion).
    Snapped,
    /// A newer request or teardown pre-empted the transition.
    Cancelled,
}

/// Messages sent to the transition actor.
#[derive(Debug)]
pub enum TransitionMessage {
    /// Grow from the thumbnail to fullscreen.
    Open {
        request: OpenRequest,
        respond_to: Option<oneshot::Sender<TransitionOutcome>>,
    },

    /// Shrink back to the thumbnail captured by the last open.
    Close { respond_to: Option<oneshot::Sender<TransitionOutcome>> },

    /// Jump straight to fullscreen, cancelling anything in flight.
    SnapToFullscreen,

    /// The fullscreen surface changed size.
    SetViewport { viewport: Viewport },

    /// Read state or subscribe to updates.
    Query {
        query: TransitionQuery,
        respond_to: oneshot::Sender<QueryResult>,
    },

    /// Stop the actor.
    Shutdown,
}

impl TransitionMessage {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "Open",
            Self::Close { .. } => "Close",
            Self::SnapToFullscreen => "SnapToFullscreen",
            Self::SetViewport { .. } => "SetViewport",
            Self::Query { .. } => "Query",
            Self::Shutdown => "Shutdown",
        }
    }
}

// ============================================================================
// Published Frames
// ============================================================================

/// One rendered step of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub values: MotionValues,
    pub phase: TransitionPhase,
    pub is_animating: bool,
    /// Transform for the overlay surface; `None` renders it untransformed.
    pub transform: Option<Transform>,
}

impl Frame {
    /// Frame of an overlay that has not been opened yet.
    #[must_use]
    pub const fn idle(corner_radius: f32) -> Self {
        Self {
            values: MotionValues::thumbnail(corner_radius),
            phase: TransitionPhase::Idle,
            is_animating: false,
            transform: None,
        }
    }
}

impl Default for Frame {
    fn default() -> Self { Self::idle(0.0) }
}

/// Point-in-time view of the actor's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSnapshot {
    pub frame: Frame,
    pub bounds: Option<ScreenRect>,
    pub viewport: Viewport,
    pub thumbnail_corner_radius: f32,
}

// ============================================================================
// Queries
// ============================================================================

/// Queries answered by the transition actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionQuery {
    /// Current snapshot.
    Snapshot,
    /// Subscribe to published frames.
    SubscribeFrames,
    /// Subscribe to the `is_animating` flag.
    SubscribeAnimating,
}

/// Results returned from queries.
pub enum QueryResult {
    Snapshot(TransitionSnapshot),
    Frames(Subscriber<Frame>),
    Animating(Subscriber<bool>),
}

impl std::fmt::Debug for QueryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(snapshot) => f.debug_tuple("Snapshot").field(snapshot).finish(),
            Self::Frames(_) => f.write_str("Frames(..)"),
            Self::Animating(_) => f.write_str("Animating(..)"),
        }
    }
}

impl QueryResult {
    /// Try to get a snapshot from the result.
    #[must_use]
    pub fn into_snapshot(self) -> Option<TransitionSnapshot> {
        match self {
            Self::Snapshot(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Try to get a frame subscriber from the result.
    #[must_use]
    pub fn into_frames(self) -> Option<Subscriber<Frame>> {
        match self {
            Self::Frames(subscriber) => Some(subscriber),
            _ => None,
        }
    }

    /// Try to get an `is_animating` subscriber from the result.
    #[must_use]
    pub fn into_animating(self) -> Option<Subscriber<bool>> {
        match self {
            Self::Animating(subscriber) => Some(subscriber),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
