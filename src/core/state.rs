//! States of the transition graph.
//!
//! A state is a node: a debug label, an accept flag, the ordered list of
//! its normal outgoing transitions and at most one failure transition.
//! States are created and wired up only by the owning machine.

use super::ids::TransitionId;
use serde::Serialize;
use std::fmt;

/// Node of the transition graph.
///
/// Read-only outside the crate. The owning [`Fsm`](crate::machine::Fsm)
/// appends outgoing transition ids as they are added.
///
/// # Example
///
/// ```rust
/// use signalgraph::Fsm;
///
/// let mut fsm = Fsm::new();
/// let even = fsm.add_state("Even", true);
///
/// let state = fsm.get_state(even).unwrap();
/// assert_eq!(state.label(), "Even");
/// assert!(state.is_accept());
/// assert!(state.transitions().is_empty());
/// assert!(state.failure_transition().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    label: String,
    accept: bool,
    failure_transition: Option<TransitionId>,
    transitions: Vec<TransitionId>,
}

impl State {
    pub(crate) fn new(label: String, accept: bool) -> Self {
        Self {
            label,
            accept,
            failure_transition: None,
            transitions: Vec::new(),
        }
    }

    /// Display label. Only used for debugging; labels need not be unique.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if being in this state counts as accepting the input so far.
    pub fn is_accept(&self) -> bool {
        self.accept
    }

    /// Catch-all transition taken when no normal transition matches.
    pub fn failure_transition(&self) -> Option<TransitionId> {
        self.failure_transition
    }

    /// Normal outgoing transitions, in the order they are tried.
    pub fn transitions(&self) -> &[TransitionId] {
        &self.transitions
    }

    /// Check if the state has no way out at all.
    pub fn is_sink(&self) -> bool {
        self.transitions.is_empty() && self.failure_transition.is_none()
    }

    pub(crate) fn push_transition(&mut self, id: TransitionId) {
        self.transitions.push(id);
    }

    pub(crate) fn set_failure_transition(&mut self, id: TransitionId) {
        self.failure_transition = Some(id);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State: {}", self.label)?;
        if self.accept {
            f.write_str(" +")?;
        }
        Ok(())
    }
}
