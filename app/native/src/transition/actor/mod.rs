//! Transition actor.
//!
//! The actor owns one overlay's [`AnimationState`] and processes requests
//! sequentially. While a transition runs it ticks on the configured frame
//! interval and selects between the next frame and the next message, so a
//! new request pre-empts the running transition at a frame boundary.
//!
//! # Cancellation
//!
//! A request that arrives mid-transition drops the running choreography and
//! resolves its completion as [`TransitionOutcome::Cancelled`]. The fields
//! stay where they were and the new sequence starts from them. Teardown
//! resolves any pending completion the same way.

mod handle;
mod messages;

pub use handle::{ActorError, TransitionHandle};
pub use messages::{
    Frame, OpenRequest, QueryResult, TransitionMessage, TransitionOutcome, TransitionQuery,
    TransitionSnapshot,
};
use eyeball::Observable;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, Interval, MissedTickBehavior};

use super::choreography::{Choreography, MotionTimings};
use super::geometry::{ScreenRect, Viewport};
use super::state::{AnimationState, MotionValues, TransitionPhase};
use super::transform::calculate_transform;

/// Channel buffer size for the transition actor.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// A choreography in flight.
struct ActiveTransition {
    choreography: Choreography,
    started: Instant,
    ticker: Interval,
    respond_to: Option<oneshot::Sender<TransitionOutcome>>,
}

impl ActiveTransition {
    fn resolve(self, outcome: TransitionOutcome) {
        if let Some(tx) = self.respond_to {
            // The requester may have stopped waiting.
            let _ = tx.send(outcome);
        }
    }
}

/// The actor that drives one overlay's transitions.
pub struct TransitionActor {
    timings: MotionTimings,
    state: AnimationState,
    phase: TransitionPhase,
    frame: Observable<Frame>,
    bounds: Option<ScreenRect>,
    viewport: Viewport,
    thumbnail_corner_radius: f32,
    active: Option<ActiveTransition>,
    receiver: mpsc::Receiver<TransitionMessage>,
}

impl TransitionActor {
    /// Spawn a new actor on the current tokio runtime and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    #[must_use]
    pub fn spawn(timings: MotionTimings) -> TransitionHandle {
        tracing::debug!(?timings, "transition: spawning actor");
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let actor = Self {
            timings,
            state: AnimationState::default(),
            phase: TransitionPhase::Idle,
            frame: Observable::new(Frame::default()),
            bounds: None,
            viewport: Viewport::default(),
            thumbnail_corner_radius: 0.0,
            active: None,
            receiver,
        };

        tokio::spawn(actor.run());

        TransitionHandle::new(sender)
    }

    /// Spawn an actor using the timings from the global configuration.
    #[must_use]
    pub fn spawn_with_config() -> TransitionHandle { Self::spawn(MotionTimings::from_app_config()) }

    async fn run(mut self) {
        tracing::trace!("transition: actor loop starting");

        loop {
            let msg = match self.active.as_mut() {
                Some(active) => tokio::select! {
                    msg = self.receiver.recv() => msg,
                    _ = active.ticker.tick() => {
                        self.on_frame();
                        continue;
                    }
                },
                None => self.receiver.recv().await,
            };

            match msg {
                Some(TransitionMessage::Shutdown) => {
                    tracing::debug!("transition: actor received shutdown");
                    break;
                }
                Some(msg) => self.handle_message(msg),
                None => {
                    tracing::debug!("transition: all handles dropped");
                    break;
                }
            }
        }

        if self.cancel_active() {
            self.state.set_animating(false);
            self.publish_frame();
        }
        tracing::debug!("transition: actor stopped");
    }

    fn handle_message(&mut self, msg: TransitionMessage) {
        tracing::trace!(message = msg.name(), phase = ?self.phase, "transition: handling message");

        match msg {
            TransitionMessage::Open { request, respond_to } => self.on_open(request, respond_to),
            TransitionMessage::Close { respond_to } => self.on_close(respond_to),
            TransitionMessage::SnapToFullscreen => {
                self.cancel_active();
                self.snap(MotionValues::FULLSCREEN, TransitionPhase::Open);
            }
            TransitionMessage::SetViewport { viewport } => {
                tracing::debug!(
                    width = viewport.width,
                    height = viewport.height,
                    "transition: viewport changed"
                );
                self.viewport = viewport;
                self.publish_frame();
            }
            TransitionMessage::Query { query, respond_to } => {
                let _ = respond_to.send(self.answer(query));
            }
            // Handled by the run loop.
            TransitionMessage::Shutdown => {}
        }
    }

    // ========================================================================
    // Requests
    // ========================================================================

    fn on_open(
        &mut self,
        request: OpenRequest,
        respond_to: Option<oneshot::Sender<TransitionOutcome>>,
    ) {
        let interrupted = self.cancel_active();

        self.bounds = request.bounds;
        self.viewport = request.viewport;
        self.thumbnail_corner_radius = if request.thumbnail_corner_radius.is_finite() {
            request.thumbnail_corner_radius.max(0.0)
        } else {
            0.0
        };

        if request.bounds.is_none() || !request.viewport.is_measured() || !self.timings.enabled {
            tracing::debug!(
                has_bounds = request.bounds.is_some(),
                viewport_measured = request.viewport.is_measured(),
                enabled = self.timings.enabled,
                "transition: opening without animation"
            );
            self.snap(MotionValues::FULLSCREEN, TransitionPhase::Open);
            resolve(respond_to, TransitionOutcome::Snapped);
            return;
        }

        let from = if interrupted {
            self.state.values()
        } else {
            let thumbnail = MotionValues::thumbnail(self.thumbnail_corner_radius);
            self.state.apply(thumbnail);
            thumbnail
        };

        let choreography = Choreography::open(from, &self.timings);
        self.start(choreography, TransitionPhase::Opening, respond_to);
    }

    fn on_close(&mut self, respond_to: Option<oneshot::Sender<TransitionOutcome>>) {
        let interrupted = self.cancel_active();

        if !interrupted && self.phase == TransitionPhase::Idle {
            tracing::trace!("transition: close while idle");
            resolve(respond_to, TransitionOutcome::Completed);
            return;
        }

        let thumbnail = MotionValues::thumbnail(self.thumbnail_corner_radius);
        if self.bounds.is_none() || !self.viewport.is_measured() || !self.timings.enabled {
            self.snap(thumbnail, TransitionPhase::Idle);
            resolve(respond_to, TransitionOutcome::Snapped);
            return;
        }

        let choreography =
            Choreography::close(self.state.values(), &self.timings, self.thumbnail_corner_radius);
        self.start(choreography, TransitionPhase::Closing, respond_to);
    }

    fn answer(&self, query: TransitionQuery) -> QueryResult {
        match query {
            TransitionQuery::Snapshot => QueryResult::Snapshot(TransitionSnapshot {
                frame: *Observable::get(&self.frame),
                bounds: self.bounds,
                viewport: self.viewport,
                thumbnail_corner_radius: self.thumbnail_corner_radius,
            }),
            TransitionQuery::SubscribeFrames => {
                QueryResult::Frames(Observable::subscribe(&self.frame))
            }
            TransitionQuery::SubscribeAnimating => {
                QueryResult::Animating(self.state.subscribe_animating())
            }
        }
    }

    // ========================================================================
    // Transition lifecycle
    // ========================================================================

    fn start(
        &mut self,
        choreography: Choreography,
        phase: TransitionPhase,
        respond_to: Option<oneshot::Sender<TransitionOutcome>>,
    ) {
        tracing::debug!(
            ?phase,
            duration_ms = choreography.duration().as_millis(),
            "transition: starting"
        );

        let mut ticker = tokio::time::interval(self.timings.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.active = Some(ActiveTransition {
            choreography,
            started: Instant::now(),
            ticker,
            respond_to,
        });
        self.phase = phase;
        self.state.set_animating(true);
        self.publish_frame();
    }

    fn on_frame(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };

        let elapsed = active.started.elapsed();
        if active.choreography.is_complete(elapsed) {
            self.finish();
            return;
        }

        self.state.apply(active.choreography.sample(elapsed));
        self.publish_frame();
    }

    fn finish(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.state.apply(active.choreography.target());
        self.phase = self.phase.settled();
        self.state.set_animating(false);
        self.publish_frame();

        tracing::debug!(phase = ?self.phase, "transition: completed");
        active.resolve(TransitionOutcome::Completed);
    }

    /// Drops the running transition, if any, leaving the fields in place.
    ///
    /// Returns whether one was running.
    fn cancel_active(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };

        tracing::debug!(
            kind = ?active.choreography.kind(),
            elapsed_ms = active.started.elapsed().as_millis(),
            "transition: cancelled"
        );
        active.resolve(TransitionOutcome::Cancelled);
        true
    }

    /// Applies `values` in one step and settles in `phase`.
    fn snap(&mut self, values: MotionValues, phase: TransitionPhase) {
        self.state.apply(values);
        self.state.set_animating(false);
        self.phase = phase;
        self.publish_frame();
    }

    fn publish_frame(&mut self) {
        let values = self.state.values();
        let transform = self.bounds.and_then(|bounds| {
            calculate_transform(bounds, self.viewport, values.progress, values.scale_overshoot)
        });

        Observable::set_if_not_eq(&mut self.frame, Frame {
            values,
            phase: self.phase,
            is_animating: self.state.is_animating(),
            transform,
        });
    }
}

fn resolve(respond_to: Option<oneshot::Sender<TransitionOutcome>>, outcome: TransitionOutcome) {
    if let Some(tx) = respond_to {
        let _ = tx.send(outcome);
    }
}

// ============================================================================
// Tests
// ============================================================================
