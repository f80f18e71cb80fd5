//! The finite-state machine engine.

use crate::core::{Signal, State, StateId, StepHistory, StepRecord, Transition, TransitionId};
use crate::machine::config::FsmConfig;
use crate::machine::error::FsmError;
use chrono::Utc;
use tracing::{debug, trace};

/// Mutable transition graph with a current-state pointer.
///
/// States and transitions live in append-only arenas; their ids are their
/// positions there. The first state added becomes both the current state
/// and the default (reset) state.
///
/// # Example
///
/// ```rust
/// use signalgraph::Fsm;
///
/// // Accepts inputs with an even number of zeros.
/// let mut fsm = Fsm::new();
/// let even = fsm.add_state("Even", true);
/// let odd = fsm.add_state("Odd", false);
/// fsm.add_transition(even, even, 1, "1").unwrap();
/// fsm.add_transition(even, odd, 0, "0").unwrap();
/// fsm.add_transition(odd, odd, 1, "1").unwrap();
/// fsm.add_transition(odd, even, 0, "0").unwrap();
///
/// assert!(fsm.handle_signal(0));
/// assert!(!fsm.is_accept_state());
/// assert!(fsm.handle_signal(0));
/// assert!(fsm.is_accept_state());
/// assert!(!fsm.handle_signal(42));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Fsm {
    states: Vec<State>,
    transitions: Vec<Transition>,
    current: Option<StateId>,
    default: Option<StateId>,
    config: FsmConfig,
    history: StepHistory,
}

impl Fsm {
    /// Create an empty machine with no states and no current state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty machine with the given options.
    pub fn with_config(config: FsmConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) if config.record_history => StepHistory::with_limit(limit),
            _ => StepHistory::new(),
        };
        Self {
            config,
            history,
            ..Self::default()
        }
    }

    /// Options the machine was created with.
    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// Append a new state and return its id.
    ///
    /// The very first state added becomes the current and the default state.
    pub fn add_state(&mut self, label: impl Into<String>, accept: bool) -> StateId {
        let id = StateId::new(self.states.len());
        let label = label.into();
        debug!(state = %id, label = %label, accept, "adding state");

        self.states.push(State::new(label, accept));
        if id.index() == 0 {
            self.current = Some(id);
            self.default = Some(id);
        }
        id
    }

    /// Append a new non-accepting state. Same as `add_state(label, false)`.
    pub fn add_plain_state(&mut self, label: impl Into<String>) -> StateId {
        self.add_state(label, false)
    }

    /// Append a transition from `origin` to `destination` on `signal`.
    ///
    /// Fails without touching the machine if either state does not exist, or
    /// if `origin` already reacts to `signal` (for [`Signal::Failure`]: if it
    /// already has a failure transition). The label plays no part in
    /// duplicate detection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signalgraph::{Fsm, FsmError, Signal};
    ///
    /// let mut fsm = Fsm::new();
    /// let start = fsm.add_state("Start", false);
    /// let bogus = fsm.add_state("Bogus", false);
    ///
    /// fsm.add_transition(start, bogus, Signal::Failure, "X").unwrap();
    /// let again = fsm.add_transition(start, start, Signal::Failure, "Y");
    /// assert_eq!(again, Err(FsmError::DuplicateFailure { origin: start }));
    /// assert_eq!(fsm.count_transitions(), 1);
    /// ```
    pub fn add_transition(
        &mut self,
        origin: StateId,
        destination: StateId,
        signal: impl Into<Signal>,
        label: impl Into<String>,
    ) -> Result<TransitionId, FsmError> {
        let signal = signal.into();
        let label = label.into();

        if let Err(err) = self.check_transition(origin, destination, signal) {
            debug!(%origin, %destination, %signal, label = %label, error = %err, "rejecting transition");
            return Err(err);
        }

        let Some(state) = self.states.get_mut(origin.index()) else {
            return Err(FsmError::UnknownOrigin(origin));
        };
        let id = TransitionId::new(self.transitions.len());
        debug!(transition = %id, %origin, %destination, %signal, label = %label, "adding transition");
        match signal {
            Signal::Failure => state.set_failure_transition(id),
            Signal::Value(_) => state.push_transition(id),
        }
        self.transitions
            .push(Transition::new(label, signal, destination));
        Ok(id)
    }

    /// Validate endpoints and uniqueness of a prospective transition.
    fn check_transition(
        &self,
        origin: StateId,
        destination: StateId,
        signal: Signal,
    ) -> Result<(), FsmError> {
        let origin_state = self
            .get_state(origin)
            .ok_or(FsmError::UnknownOrigin(origin))?;
        if self.get_state(destination).is_none() {
            return Err(FsmError::UnknownDestination(destination));
        }
        match self.find_conflict(origin_state, signal) {
            Some(_) if signal.is_failure() => Err(FsmError::DuplicateFailure { origin }),
            Some(_) => Err(FsmError::DuplicateSignal { origin, signal }),
            None => Ok(()),
        }
    }

    /// Existing transition of `state` that already claims `signal`.
    fn find_conflict(&self, state: &State, signal: Signal) -> Option<TransitionId> {
        match signal {
            Signal::Failure => state.failure_transition(),
            Signal::Value(value) => state.transitions().iter().copied().find(|&id| {
                self.get_transition(id)
                    .is_some_and(|t| t.signal().matches(value))
            }),
        }
    }

    // ---------------------------------------------------------------
    // Introspection
    // ---------------------------------------------------------------

    pub fn count_states(&self) -> usize {
        self.states.len()
    }

    pub fn count_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// State the machine currently occupies, `None` while it has no states.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Reset point of the machine: the first state ever added.
    pub fn default_state(&self) -> Option<StateId> {
        self.default
    }

    /// The current state's entity.
    pub fn current(&self) -> Option<&State> {
        self.current.and_then(|id| self.get_state(id))
    }

    /// Check if the machine is in an accepting state.
    ///
    /// A machine without a current state is never accepting.
    pub fn is_accept_state(&self) -> bool {
        self.current().is_some_and(State::is_accept)
    }

    pub fn get_state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    pub fn get_transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id.index())
    }

    /// All states in id order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId::new(index), state))
    }

    /// All transitions in id order.
    pub fn transitions(&self) -> impl Iterator<Item = (TransitionId, &Transition)> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .map(|(index, transition)| (TransitionId::new(index), transition))
    }

    /// Outgoing transitions of a state in match order: normal transitions
    /// first, then the failure transition. Empty for an unknown state.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = (TransitionId, &Transition)> + '_ {
        self.get_state(id)
            .into_iter()
            .flat_map(|state| {
                state
                    .transitions()
                    .iter()
                    .copied()
                    .chain(state.failure_transition())
            })
            .filter_map(move |tid| self.get_transition(tid).map(|t| (tid, t)))
    }

    /// Recorded steps. Empty unless history recording is configured.
    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ---------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------

    /// Move the machine to `id`.
    ///
    /// Unknown ids are rejected and the current state is kept.
    pub fn set_state(&mut self, id: StateId) -> Result<(), FsmError> {
        if self.get_state(id).is_none() {
            return Err(FsmError::UnknownState(id));
        }
        trace!(state = %id, "setting state");
        self.current = Some(id);
        Ok(())
    }

    /// Return to the default state. Returns `false` on an empty machine.
    pub fn reset(&mut self) -> bool {
        match self.default {
            Some(default) => self.set_state(default).is_ok(),
            None => false,
        }
    }

    /// Transition `handle_signal` would take for `signal`, without taking it.
    ///
    /// Normal transitions are tried in insertion order; the failure
    /// transition is the fallback.
    pub fn resolve(&self, signal: i32) -> Option<TransitionId> {
        let state = self.current()?;
        state
            .transitions()
            .iter()
            .copied()
            .find(|&id| {
                self.get_transition(id)
                    .is_some_and(|t| t.signal().matches(signal))
            })
            .or(state.failure_transition())
    }

    /// Advance the machine on `signal`.
    ///
    /// Returns `true` if a normal or failure transition was taken. Returns
    /// `false` and stays put when the machine has no current state or the
    /// current state has no applicable transition.
    pub fn handle_signal(&mut self, signal: i32) -> bool {
        let Some(from) = self.current else {
            trace!(signal, "no current state, ignoring signal");
            return false;
        };
        let Some((id, to, via_failure)) = self.resolve(signal).and_then(|id| {
            self.get_transition(id)
                .map(|t| (id, t.destination(), t.is_failure()))
        }) else {
            trace!(state = %from, signal, "no transition for signal");
            return false;
        };

        trace!(%from, %to, transition = %id, signal, via_failure, "taking transition");
        self.current = Some(to);
        if self.config.record_history {
            self.history.record(StepRecord {
                from,
                to,
                transition: id,
                signal,
                via_failure,
                timestamp: Utc::now(),
            });
        }
        true
    }

    /// Handle every signal in order and return how many moved the machine.
    ///
    /// Signals without an applicable transition are skipped; the machine
    /// stays where it is for them.
    pub fn feed<I>(&mut self, signals: I) -> usize
    where
        I: IntoIterator<Item = i32>,
    {
        signals
            .into_iter()
            .filter(|&signal| self.handle_signal(signal))
            .count()
    }

    /// Run `input` through the machine from the default state.
    ///
    /// Each `char` is fed as its scalar value. Returns whether the machine
    /// ends in an accepting state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signalgraph::{Fsm, Signal};
    ///
    /// let mut fsm = Fsm::new();
    /// let start = fsm.add_state("Start", false);
    /// let bogus = fsm.add_state("Bogus", false);
    /// let o = fsm.add_state("O", false);
    /// let k = fsm.add_state("K", true);
    /// fsm.add_transition(start, o, 'O', "O").unwrap();
    /// fsm.add_transition(o, k, 'K', "K").unwrap();
    /// for state in [start, o, k] {
    ///     fsm.add_transition(state, bogus, Signal::Failure, "Bogus").unwrap();
    /// }
    ///
    /// assert!(fsm.recognize("OK"));
    /// assert!(!fsm.recognize("OKAY"));
    /// assert!(fsm.recognize("OK"));
    /// ```
    pub fn recognize(&mut self, input: &str) -> bool {
        if !self.reset() {
            return false;
        }
        self.feed(input.chars().map(|c| c as i32));
        let accepted = self.is_accept_state();
        debug!(input, accepted, state = ?self.current, "recognized input");
        accepted
    }
}
