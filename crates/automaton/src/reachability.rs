use std::collections::VecDeque;

use bitvec::bitvec;
use bitvec::order::Lsb0;

use crate::Dfa;
use crate::StateIndex;
use crate::Symbol;

/// Computes the reachable portion of a deterministic automaton from its
/// initial state.
///
/// Returns a new automaton containing only the reachable states, numbered in
/// breadth first order, and a mapping from old to new state indices (None
/// for unreachable states).
pub fn compute_reachable(dfa: &Dfa) -> (Dfa, Vec<Option<StateIndex>>) {
    let mut mapping: Vec<Option<StateIndex>> = vec![None; dfa.num_of_states()];
    let mut visited = bitvec![usize, Lsb0; 0; dfa.num_of_states()];
    let mut order = Vec::new();

    let mut queue = VecDeque::new();
    let initial = dfa.initial_state_index();
    queue.push_back(initial);
    visited.set(*initial, true);

    while let Some(state) = queue.pop_front() {
        mapping[*state] = Some(StateIndex::new(order.len()));
        order.push(state);

        for symbol in Symbol::ALPHABET {
            let to = dfa.next_state(state, symbol);
            if !visited[*to] {
                visited.set(*to, true);
                queue.push_back(to);
            }
        }
    }

    // Every successor of a reachable state is reachable, so the mapping is defined for them.
    let renumber = |state: StateIndex| mapping[*state].unwrap_or(state);

    let labels = order.iter().map(|state| dfa.state_label(*state).to_string()).collect();
    let transitions = order
        .iter()
        .map(|state| Symbol::ALPHABET.map(|symbol| renumber(dfa.next_state(*state, symbol))))
        .collect();
    let accept_states = dfa
        .accept_states()
        .iter()
        .filter_map(|state| mapping[**state])
        .collect();

    let result = Dfa::from_parts(labels, renumber(initial), transitions, accept_states);
    (result, mapping)
}
