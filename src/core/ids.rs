//! Stable identifiers for states and transitions.
//!
//! An identifier is the 0-based position of its entity in the owning
//! machine's arena. Ids are never reused because nothing is ever removed.

use serde::Serialize;
use std::fmt;

/// Identifier of a state inside one [`Fsm`](crate::machine::Fsm).
///
/// # Example
///
/// ```rust
/// use signalgraph::core::StateId;
///
/// let id = StateId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StateId(usize);

/// Identifier of a transition inside one [`Fsm`](crate::machine::Fsm).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TransitionId(usize);

impl StateId {
    /// Wrap a raw arena position. The id is not checked against any machine.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Arena position of this state.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl TransitionId {
    /// Wrap a raw arena position. The id is not checked against any machine.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Arena position of this transition.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
