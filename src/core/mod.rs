//! Core graph types.
//!
//! This module contains the plain data the machine is built from:
//! - Stable `StateId` / `TransitionId` handles into the machine's arenas
//! - `Signal`, with a dedicated variant for the catch-all failure edge
//! - `State` and `Transition` nodes and edges
//! - Step history records
//!
//! Nothing here owns other entities; states and transitions refer to each
//! other only through ids handed out by the owning machine.

mod history;
mod ids;
mod signal;
mod state;
mod transition;

pub use history::{StepHistory, StepRecord};
pub use ids::{StateId, TransitionId};
pub use signal::Signal;
pub use state::State;
pub use transition::Transition;
