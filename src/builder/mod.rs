//! Builder API for assembling a whole machine before using it.
//!
//! [`Fsm::add_transition`](crate::Fsm::add_transition) reports problems one
//! call at a time. `FsmBuilder` stages the graph instead and reports every
//! problem from `build()`.

mod machine;

pub use machine::FsmBuilder;
