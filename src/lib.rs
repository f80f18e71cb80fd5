//! Signalgraph: an incrementally built finite-state machine engine
//!
//! A machine is a directed graph of states and labeled transitions with a
//! current-state pointer. Callers append states and transitions (nothing is
//! ever removed) and then walk the graph one integer signal at a time.
//!
//! # Core Concepts
//!
//! - **State**: a node with a debug label and an accept flag
//! - **Transition**: an edge keyed on a [`Signal`]; each state may also have
//!   one catch-all [`Signal::Failure`] edge taken when nothing else matches
//! - **Default state**: the first state added, used to reset the machine
//! - **Ids**: [`StateId`] and [`TransitionId`] are stable arena positions
//!
//! # Example
//!
//! ```rust
//! use signalgraph::{Fsm, Signal};
//!
//! // Recognizes exactly "MOON"; anything else falls into a sink.
//! let mut fsm = Fsm::new();
//! let start = fsm.add_state("No Input", false);
//! let bogus = fsm.add_state("Not MOON", false);
//! let m = fsm.add_state("M", false);
//! let o1 = fsm.add_state("O", false);
//! let o2 = fsm.add_state("O", false);
//! let n = fsm.add_state("N", true);
//!
//! fsm.add_transition(start, m, 'M', "M").unwrap();
//! fsm.add_transition(m, o1, 'O', "O").unwrap();
//! fsm.add_transition(o1, o2, 'O', "O").unwrap();
//! fsm.add_transition(o2, n, 'N', "N").unwrap();
//! for state in [start, m, o1, o2, n] {
//!     fsm.add_transition(state, bogus, Signal::Failure, "X").unwrap();
//! }
//!
//! assert!(fsm.recognize("MOON"));
//! assert!(!fsm.recognize("MOO"));
//! assert!(!fsm.recognize("MOONS"));
//! assert_eq!(fsm.current_state(), Some(bogus));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Signal, State, StateId, StepHistory, StepRecord, Transition, TransitionId};
pub use machine::{Fsm, FsmConfig, FsmError, FsmSnapshot};
