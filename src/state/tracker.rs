//! Request tracker implementation

use super::sequence::{RequestSequencer, Ticket};
use super::types::LoadState;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Load state of one view plus the sequencing that protects it
///
/// Clones share state, so a spawned fetch can complete into the same
/// tracker the view reads from.
#[derive(Debug)]
pub struct RequestTracker<T> {
    sequencer: RequestSequencer,
    state: Arc<RwLock<LoadState<T>>>,
}

impl<T> RequestTracker<T> {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self {
            sequencer: RequestSequencer::new(),
            state: Arc::new(RwLock::new(LoadState::Idle)),
        }
    }

    /// Start a request: issue its ticket and move to `Loading`
    pub async fn begin(&self) -> Ticket {
        let mut state = self.state.write().await;
        let ticket = self.sequencer.issue();
        *state = LoadState::Loading;
        ticket
    }

    /// Apply the outcome of the request holding `ticket`
    ///
    /// Outcomes of superseded requests are discarded. Returns whether the
    /// outcome was applied.
    pub async fn complete(&self, ticket: Ticket, outcome: Result<T>) -> bool {
        let mut state = self.state.write().await;
        if !self.sequencer.is_latest(ticket) {
            debug!(
                ticket = ticket.get(),
                latest = self.sequencer.latest().map(Ticket::get),
                "Discarding stale response"
            );
            return false;
        }

        *state = match outcome {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    /// Read lock on the current state
    pub async fn state(&self) -> tokio::sync::RwLockReadGuard<'_, LoadState<T>> {
        self.state.read().await
    }

    /// Whether `ticket` belongs to the newest request
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.sequencer.is_latest(ticket)
    }
}

impl<T: Clone> RequestTracker<T> {
    /// Copy of the current state
    pub async fn snapshot(&self) -> LoadState<T> {
        self.state.read().await.clone()
    }
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RequestTracker<T> {
    fn clone(&self) -> Self {
        Self {
            sequencer: self.sequencer.clone(),
            state: Arc::clone(&self.state),
        }
    }
}
