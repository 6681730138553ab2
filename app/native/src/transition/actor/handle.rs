//! Handle for communicating with the transition actor.
//!
//! The `TransitionHandle` is a cheap, cloneable interface for sending
//! requests to the actor and subscribing to the frames it publishes.

use std::time::Duration;

use eyeball::Subscriber;
use tokio::sync::{mpsc, oneshot};

use super::messages::{
    Frame, OpenRequest, QueryResult, TransitionMessage, TransitionOutcome, TransitionQuery,
    TransitionSnapshot,
};
use crate::transition::geometry::Viewport;

/// Error types for actor communication.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// Failed to send message to actor.
    #[error("Failed to send message to actor: channel closed")]
    SendFailed,

    /// Failed to receive response from actor.
    #[error("Failed to receive response from actor: channel closed")]
    ReceiveFailed,

    /// The actor answered a query with the wrong kind of result.
    #[error("Unexpected response from actor for {0:?}")]
    UnexpectedResponse(TransitionQuery),

    /// Query timed out.
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
}

/// Handle for communicating with the transition actor.
///
/// Dropping every handle stops the actor.
#[derive(Clone)]
pub struct TransitionHandle {
    sender: mpsc::Sender<TransitionMessage>,
}

impl TransitionHandle {
    pub(crate) const fn new(sender: mpsc::Sender<TransitionMessage>) -> Self { Self { sender } }

    // ========================================================================
    // Sending
    // ========================================================================

    /// Send a message without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped or its
    /// queue is full.
    pub fn send(&self, msg: TransitionMessage) -> Result<(), ActorError> {
        self.sender.try_send(msg).map_err(|_| ActorError::SendFailed)
    }

    /// Send a message, waiting for queue space.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn send_async(&self, msg: TransitionMessage) -> Result<(), ActorError> {
        self.sender.send(msg).await.map_err(|_| ActorError::SendFailed)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Open the overlay and wait until the transition ends.
    ///
    /// Resolves once all four sub-animations have finished, or earlier with
    /// [`TransitionOutcome::Cancelled`] if another request pre-empts it.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn open(&self, request: OpenRequest) -> Result<TransitionOutcome, ActorError> {
        let (tx, rx) = oneshot::channel();
        self.send_async(TransitionMessage::Open { request, respond_to: Some(tx) }).await?;
        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Start opening the overlay without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub fn open_detached(&self, request: OpenRequest) -> Result<(), ActorError> {
        self.send(TransitionMessage::Open { request, respond_to: None })
    }

    /// Close the overlay and wait until the transition ends.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn close(&self) -> Result<TransitionOutcome, ActorError> {
        let (tx, rx) = oneshot::channel();
        self.send_async(TransitionMessage::Close { respond_to: Some(tx) }).await?;
        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Start closing the overlay without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub fn close_detached(&self) -> Result<(), ActorError> {
        self.send(TransitionMessage::Close { respond_to: None })
    }

    /// Jump to fullscreen without animating.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub fn snap_to_fullscreen(&self) -> Result<(), ActorError> {
        self.send(TransitionMessage::SnapToFullscreen)
    }

    /// Update the fullscreen surface size.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub fn set_viewport(&self, viewport: Viewport) -> Result<(), ActorError> {
        self.send(TransitionMessage::SetViewport { viewport })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Execute a query and wait for the result.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed, or
    /// [`ActorError::ReceiveFailed`] if the response channel is closed.
    pub async fn query(&self, query: TransitionQuery) -> Result<QueryResult, ActorError> {
        let (tx, rx) = oneshot::channel();
        self.send_async(TransitionMessage::Query { query, respond_to: tx }).await?;
        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Execute a query with a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Timeout`] if the query doesn't complete in time,
    /// or any error from [`Self::query`].
    pub async fn query_timeout(
        &self,
        query: TransitionQuery,
        timeout: Duration,
    ) -> Result<QueryResult, ActorError> {
        tokio::time::timeout(timeout, self.query(query))
            .await
            .map_err(|_| ActorError::Timeout(timeout))?
    }

    /// Current state of the actor.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn snapshot(&self) -> Result<TransitionSnapshot, ActorError> {
        let query = TransitionQuery::Snapshot;
        self.query(query).await?.into_snapshot().ok_or(ActorError::UnexpectedResponse(query))
    }

    /// Subscribe to published frames.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn subscribe_frames(&self) -> Result<Subscriber<Frame>, ActorError> {
        let query = TransitionQuery::SubscribeFrames;
        self.query(query).await?.into_frames().ok_or(ActorError::UnexpectedResponse(query))
    }

    /// Subscribe to the `is_animating` flag.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn subscribe_animating(&self) -> Result<Subscriber<bool>, ActorError> {
        let query = TransitionQuery::SubscribeAnimating;
        self.query(query).await?.into_animating().ok_or(ActorError::UnexpectedResponse(query))
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Stop the actor. Pending transitions resolve as cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has already stopped.
    pub fn shutdown(&self) -> Result<(), ActorError> { self.send(TransitionMessage::Shutdown) }

    /// Check if the actor is still running (channel is open).
    #[must_use]
    pub fn is_alive(&self) -> bool { !self.sender.is_closed() }

    /// Get the number of messages waiting in the queue.
    #[must_use]
    pub fn pending_messages(&self) -> usize { self.sender.max_capacity() - self.sender.capacity() }
}

impl std::fmt::Debug for TransitionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionHandle")
            .field("alive", &self.is_alive())
            .field("pending", &self.pending_messages())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
