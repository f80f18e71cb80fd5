//! The state machine engine.
//!
//! - `Fsm`: owns the graph and the current-state pointer, builds the graph
//!   one state or transition at a time and advances it one signal at a time
//! - `FsmConfig`: creation-time options such as step history recording
//! - `FsmError`: construction and steering failures
//! - Text and JSON renderings for debugging

mod config;
mod error;
mod fsm;
mod render;

pub use config::FsmConfig;
pub use error::FsmError;
pub use fsm::Fsm;
pub use render::FsmSnapshot;
