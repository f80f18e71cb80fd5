//! Property-based tests for the machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated graphs and signal sequences.

use proptest::prelude::*;
use signalgraph::{Fsm, Signal, StateId};

/// A transition request that may or may not be valid for the graph.
#[derive(Clone, Debug)]
struct Edge {
    origin: usize,
    destination: usize,
    signal: Signal,
}

prop_compose! {
    fn arbitrary_signal()(value in -3i32..6, failure in prop::bool::weighted(0.2)) -> Signal {
        if failure { Signal::Failure } else { Signal::Value(value) }
    }
}

prop_compose! {
    fn arbitrary_edge(max_state: usize)(
        origin in 0..max_state,
        destination in 0..max_state,
        signal in arbitrary_signal(),
    ) -> Edge {
        Edge { origin, destination, signal }
    }
}

prop_compose! {
    fn arbitrary_graph()(state_count in 1..8usize)(
        accepts in prop::collection::vec(any::<bool>(), state_count),
        edges in prop::collection::vec(arbitrary_edge(state_count + 2), 0..30),
    ) -> (Vec<bool>, Vec<Edge>) {
        (accepts, edges)
    }
}

fn build(accepts: &[bool], edges: &[Edge]) -> Fsm {
    let mut fsm = Fsm::new();
    for (index, accept) in accepts.iter().enumerate() {
        fsm.add_state(format!("s{index}"), *accept);
    }
    for edge in edges {
        let _ = fsm.add_transition(
            StateId::new(edge.origin),
            StateId::new(edge.destination),
            edge.signal,
            "edge",
        );
    }
    fsm
}

proptest! {
    #[test]
    fn fresh_machine_handles_nothing(signal in any::<i32>()) {
        let mut fsm = Fsm::new();
        prop_assert!(!fsm.handle_signal(signal));
        prop_assert_eq!(fsm.current_state(), None);
        prop_assert!(!fsm.is_accept_state());
    }

    #[test]
    fn state_ids_follow_insertion_order(count in 1..20usize) {
        let mut fsm = Fsm::new();
        for index in 0..count {
            prop_assert_eq!(fsm.add_state("s", false), StateId::new(index));
            prop_assert_eq!(fsm.current_state(), Some(StateId::new(0)));
            prop_assert_eq!(fsm.default_state(), Some(StateId::new(0)));
        }
        prop_assert_eq!(fsm.count_states(), count);
    }

    #[test]
    fn accepted_transitions_round_trip((accepts, edges) in arbitrary_graph()) {
        let mut fsm = build(&accepts, &[]);
        for edge in &edges {
            let origin = StateId::new(edge.origin);
            let destination = StateId::new(edge.destination);
            let before = fsm.count_transitions();
            match fsm.add_transition(origin, destination, edge.signal, "edge") {
                Ok(id) => {
                    prop_assert_eq!(id.index(), before);
                    let transition = fsm.get_transition(id).unwrap();
                    prop_assert_eq!(transition.signal(), edge.signal);
                    prop_assert_eq!(transition.destination(), destination);
                    prop_assert_eq!(transition.label(), "edge");
                }
                Err(_) => {
                    prop_assert_eq!(fsm.count_transitions(), before);
                }
            }
        }
    }

    #[test]
    fn repeated_transition_is_rejected((accepts, edges) in arbitrary_graph()) {
        let mut fsm = build(&accepts, &edges);
        for edge in &edges {
            let before = fsm.count_transitions();
            let again = fsm.add_transition(
                StateId::new(edge.origin),
                StateId::new(edge.destination),
                edge.signal,
                "another label",
            );
            prop_assert!(again.is_err());
            prop_assert_eq!(fsm.count_transitions(), before);
        }
    }

    #[test]
    fn every_state_has_unique_signals((accepts, edges) in arbitrary_graph()) {
        let fsm = build(&accepts, &edges);
        for (_, state) in fsm.states() {
            let mut signals: Vec<_> = state
                .transitions()
                .iter()
                .map(|id| fsm.get_transition(*id).unwrap().signal())
                .collect();
            let total = signals.len();
            signals.sort_by_key(|signal| signal.value());
            signals.dedup();
            prop_assert_eq!(signals.len(), total);
            prop_assert!(signals.iter().all(|signal| !signal.is_failure()));
        }
    }

    #[test]
    fn walking_never_changes_the_graph(
        (accepts, edges) in arbitrary_graph(),
        signals in prop::collection::vec(-3i32..6, 0..40),
    ) {
        let mut fsm = build(&accepts, &edges);
        let (states, transitions) = (fsm.count_states(), fsm.count_transitions());
        for signal in signals {
            let before = fsm.current_state();
            let expected = fsm.resolve(signal);
            let moved = fsm.handle_signal(signal);
            prop_assert_eq!(moved, expected.is_some());
            if !moved {
                prop_assert_eq!(fsm.current_state(), before);
            }
            prop_assert!(fsm.current().is_some());
        }
        prop_assert_eq!(fsm.count_states(), states);
        prop_assert_eq!(fsm.count_transitions(), transitions);
    }

    #[test]
    fn reset_returns_to_default(
        (accepts, edges) in arbitrary_graph(),
        signals in prop::collection::vec(-3i32..6, 0..40),
    ) {
        let mut fsm = build(&accepts, &edges);
        fsm.feed(signals);
        let default = fsm.default_state().unwrap();
        fsm.set_state(default).unwrap();
        prop_assert_eq!(fsm.current_state(), fsm.default_state());
        prop_assert_eq!(fsm.is_accept_state(), accepts[0]);
    }

    #[test]
    fn lookups_out_of_range_find_nothing(
        (accepts, edges) in arbitrary_graph(),
        offset in 0..100usize,
    ) {
        let mut fsm = build(&accepts, &edges);
        let state = StateId::new(fsm.count_states() + offset);
        prop_assert!(fsm.get_state(state).is_none());
        prop_assert!(fsm.set_state(state).is_err());
        prop_assert_eq!(fsm.current_state(), fsm.default_state());
        let transition = signalgraph::TransitionId::new(fsm.count_transitions() + offset);
        prop_assert!(fsm.get_transition(transition).is_none());
    }
}
