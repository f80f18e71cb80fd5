//! Step history tracking.
//!
//! Records the transitions a machine takes while handling signals. Recording
//! is opt-in through [`FsmConfig`](crate::machine::FsmConfig) and can be
//! bounded so long-running recognizers keep only the most recent steps.

use super::ids::{StateId, TransitionId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single handled signal that moved the machine.
///
/// # Example
///
/// ```rust
/// use signalgraph::core::{StateId, StepRecord, TransitionId};
/// use chrono::Utc;
///
/// let step = StepRecord {
///     from: StateId::new(0),
///     to: StateId::new(1),
///     transition: TransitionId::new(1),
///     signal: 0,
///     via_failure: false,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step.to, StateId::new(1));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepRecord {
    /// State the machine was in when the signal arrived
    pub from: StateId,
    /// State the machine entered
    pub to: StateId,
    /// Transition that was taken
    pub transition: TransitionId,
    /// Input that triggered the step
    pub signal: i32,
    /// Whether the failure transition was taken instead of a normal one
    pub via_failure: bool,
    /// When the step happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of steps, oldest first.
///
/// # Example
///
/// ```rust
/// use signalgraph::core::{StateId, StepHistory, StepRecord, TransitionId};
/// use chrono::Utc;
///
/// let mut history = StepHistory::new();
/// history.record(StepRecord {
///     from: StateId::new(0),
///     to: StateId::new(1),
///     transition: TransitionId::new(0),
///     signal: 7,
///     via_failure: false,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![StateId::new(0), StateId::new(1)]);
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct StepHistory {
    records: VecDeque<StepRecord>,
    #[serde(skip)]
    limit: Option<usize>,
}

impl StepHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Append a step, dropping the oldest ones beyond the limit.
    pub fn record(&mut self, step: StepRecord) {
        if self.limit == Some(0) {
            return;
        }
        self.records.push_back(step);
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &StepRecord> {
        self.records.iter()
    }

    /// Most recent step.
    pub fn last(&self) -> Option<&StepRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the origin of the oldest retained step, then the destination
    /// of every step. Empty when nothing was recorded.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|step| step.to));
        path
    }

    /// Time between the oldest and newest retained steps.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: usize, to: usize, timestamp: DateTime<Utc>) -> StepRecord {
        StepRecord {
            from: StateId::new(from),
            to: StateId::new(to),
            transition: TransitionId::new(0),
            signal: 0,
            via_failure: false,
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StepHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn path_returns_state_sequence() {
        let mut history = StepHistory::new();
        let now = Utc::now();
        history.record(step(0, 1, now));
        history.record(step(1, 2, now));

        assert_eq!(
            history.path(),
            vec![StateId::new(0), StateId::new(1), StateId::new(2)]
        );
        assert_eq!(history.last().map(|s| s.to), Some(StateId::new(2)));
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut history = StepHistory::with_limit(2);
        let now = Utc::now();
        history.record(step(0, 1, now));
        history.record(step(1, 2, now));
        history.record(step(2, 3, now));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.path(),
            vec![StateId::new(1), StateId::new(2), StateId::new(3)]
        );
    }

    #[test]
    fn huge_limit_does_not_reserve_up_front() {
        let mut history = StepHistory::with_limit(usize::MAX);
        history.record(step(0, 1, Utc::now()));
        history.record(step(1, 2, Utc::now()));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = StepHistory::with_limit(0);
        history.record(step(0, 1, Utc::now()));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut history = StepHistory::new();
        let start = Utc::now();
        history.record(step(0, 1, start));
        history.record(step(1, 0, start + chrono::Duration::milliseconds(25)));

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_step_has_duration_zero() {
        let mut history = StepHistory::new();
        history.record(step(0, 0, Utc::now()));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = StepHistory::new();
        history.record(step(0, 1, Utc::now()));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_records() {
        let mut history = StepHistory::new();
        history.record(step(0, 1, Utc::now()));

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["records"][0]["to"], 1);
        assert_eq!(json["records"][0]["via_failure"], false);
    }
}
