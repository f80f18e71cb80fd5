//! Errors reported by the machine.

use crate::core::{Signal, StateId};
use thiserror::Error;

/// Errors that can occur when building or steering a machine.
///
/// Every error leaves the machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Origin state {0} does not exist")]
    UnknownOrigin(StateId),

    #[error("Destination state {0} does not exist")]
    UnknownDestination(StateId),

    #[error("State {0} does not exist")]
    UnknownState(StateId),

    /// The origin already reacts to this signal; labels are not compared
    #[error("State {origin} already has a transition on signal {signal}")]
    DuplicateSignal { origin: StateId, signal: Signal },

    #[error("State {origin} already has a failure transition")]
    DuplicateFailure { origin: StateId },

    /// Rendering a snapshot to JSON failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FsmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
