//! Batch builder that validates a whole graph at once.

use crate::core::{Signal, StateId};
use crate::machine::{Fsm, FsmConfig, FsmError};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// A transition waiting to be installed by [`FsmBuilder::build`].
#[derive(Clone, Debug)]
struct PendingTransition {
    origin: StateId,
    destination: StateId,
    signal: Signal,
    label: String,
}

/// Builder that stages states and transitions and reports every rejected
/// transition in one go.
///
/// State ids handed out by the builder are the ids the states get in the
/// built machine.
///
/// # Example
///
/// ```rust
/// use signalgraph::builder::FsmBuilder;
/// use signalgraph::Signal;
///
/// let mut builder = FsmBuilder::new();
/// let start = builder.state("Start", false);
/// let bogus = builder.state("Bogus", false);
/// builder
///     .transition(start, start, 'a', "a")
///     .transition(start, bogus, Signal::Failure, "else");
///
/// let mut fsm = builder.build().unwrap();
/// assert!(fsm.handle_signal('a' as i32));
/// assert!(fsm.handle_signal('z' as i32));
/// assert_eq!(fsm.current_state(), Some(bogus));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FsmBuilder {
    config: FsmConfig,
    states: Vec<(String, bool)>,
    transitions: Vec<PendingTransition>,
}

impl FsmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the built machine.
    pub fn config(&mut self, config: FsmConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Stage a state and return the id it will have.
    pub fn state(&mut self, label: impl Into<String>, accept: bool) -> StateId {
        self.states.push((label.into(), accept));
        StateId::new(self.states.len() - 1)
    }

    /// Stage a transition. Nothing is checked until [`build`](Self::build).
    pub fn transition(
        &mut self,
        origin: StateId,
        destination: StateId,
        signal: impl Into<Signal>,
        label: impl Into<String>,
    ) -> &mut Self {
        self.transitions.push(PendingTransition {
            origin,
            destination,
            signal: signal.into(),
            label: label.into(),
        });
        self
    }

    /// Build the machine.
    ///
    /// Transitions are installed in staging order. Returns ALL rejections
    /// if any transition has an unknown endpoint or duplicates an earlier
    /// one.
    pub fn build(self) -> Result<Fsm, NonEmptyVec<FsmError>> {
        let mut fsm = Fsm::with_config(self.config);
        for (label, accept) in self.states {
            fsm.add_state(label, accept);
        }

        let checks: Vec<Validation<(), NonEmptyVec<FsmError>>> = self
            .transitions
            .into_iter()
            .map(|pending| {
                match fsm.add_transition(
                    pending.origin,
                    pending.destination,
                    pending.signal,
                    pending.label,
                ) {
                    Ok(_) => Validation::success(()),
                    Err(err) => Validation::fail(err),
                }
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(_) => {
                debug!(
                    states = fsm.count_states(),
                    transitions = fsm.count_transitions(),
                    "built machine"
                );
                Ok(fsm)
            }
            Validation::Failure(errors) => {
                warn!(rejected = errors.len(), "machine has invalid transitions");
                Err(errors)
            }
        }
    }
}
