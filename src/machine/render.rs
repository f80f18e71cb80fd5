//! Read-only renderings of a machine for debugging and telemetry.
//!
//! Both the text dump and the snapshot are derived from the graph on
//! demand; neither is ever read back into a machine.

use crate::core::{State, StateId, Transition};
use crate::machine::error::FsmError;
use crate::machine::fsm::Fsm;
use serde::Serialize;
use std::fmt;

/// Serializable view of a machine at one point in time.
#[derive(Clone, Debug, Serialize)]
pub struct FsmSnapshot<'a> {
    pub states: Vec<&'a State>,
    pub transitions: Vec<&'a Transition>,
    pub current_state: Option<StateId>,
    pub default_state: Option<StateId>,
    pub accepting: bool,
}

impl FsmSnapshot<'_> {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, FsmError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Fsm {
    /// Borrow the whole graph as a serializable view.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signalgraph::Fsm;
    ///
    /// let mut fsm = Fsm::new();
    /// let a = fsm.add_state("A", true);
    /// fsm.add_transition(a, a, 1, "loop").unwrap();
    ///
    /// let snapshot = fsm.snapshot();
    /// assert_eq!(snapshot.states.len(), 1);
    /// assert!(snapshot.to_json().unwrap().contains("\"loop\""));
    /// ```
    pub fn snapshot(&self) -> FsmSnapshot<'_> {
        FsmSnapshot {
            states: self.states().map(|(_, state)| state).collect(),
            transitions: self.transitions().map(|(_, t)| t).collect(),
            current_state: self.current_state(),
            default_state: self.default_state(),
            accepting: self.is_accept_state(),
        }
    }
}

impl fmt::Display for Fsm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, state) in self.states() {
            writeln!(f, "  state {id}: {state}")?;
        }
        for (id, transition) in self.transitions() {
            writeln!(f, "  trans {id}: {transition}")?;
        }
        match self.current_state() {
            Some(id) => write!(f, "  current state: {id}")?,
            None => f.write_str("  current state: none")?,
        }
        if self.is_accept_state() {
            f.write_str(" (accepting state!)")?;
        }
        writeln!(f)
    }
}
