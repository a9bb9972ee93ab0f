//! Request state module
//!
//! Tracks the lifecycle of the requests behind a view so that a slow,
//! superseded response can never overwrite a newer one.
//!
//! # Overview
//!
//! The state module provides:
//! - `RequestSequencer` - monotonically increasing request tickets
//! - `LoadState` - idle, loading, ready or failed
//! - `RequestTracker` - applies an outcome only if its ticket is the latest

mod sequence;
mod tracker;
mod types;

pub use sequence::{RequestSequencer, Ticket};
pub use tracker::RequestTracker;
pub use types::{ListView, LoadState};
