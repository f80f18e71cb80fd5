//! Labeled edges of the transition graph.

use super::ids::StateId;
use super::signal::Signal;
use serde::Serialize;
use std::fmt;

/// Directed edge taken when its signal arrives.
///
/// A transition does not know its origin; it is referenced from exactly one
/// state, either from that state's normal list or from its failure slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    label: String,
    signal: Signal,
    destination: StateId,
}

impl Transition {
    pub(crate) fn new(label: String, signal: Signal, destination: StateId) -> Self {
        Self {
            label,
            signal,
            destination,
        }
    }

    /// Display label. Only used for debugging.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Signal that activates this transition.
    pub fn signal(&self) -> Signal {
        self.signal
    }

    /// State entered when the transition is taken.
    pub fn destination(&self) -> StateId {
        self.destination
    }

    /// Check if this is a catch-all failure transition.
    pub fn is_failure(&self) -> bool {
        self.signal.is_failure()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" ({}) --> {}",
            self.label, self.signal, self.destination
        )
    }
}
