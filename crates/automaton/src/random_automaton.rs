use rand::Rng;

use crate::AutomatonDescription;
use crate::Dfa;
use crate::Label;
use crate::Nfa;
use crate::StateIndex;

/// Generates a random deterministic automaton with the given number of states,
/// labelled `s0`, `s1`, ..., where every state is accepting with the given
/// probability. The initial state is `s0`.
pub fn random_dfa(rng: &mut impl Rng, num_of_states: usize, accepting_probability: f64) -> Dfa {
    assert!(num_of_states > 0, "A deterministic automaton needs at least one state");

    let labels = (0..num_of_states).map(|i| format!("s{i}")).collect();
    let transitions = (0..num_of_states)
        .map(|_| {
            [
                StateIndex::new(rng.random_range(0..num_of_states)),
                StateIndex::new(rng.random_range(0..num_of_states)),
            ]
        })
        .collect();
    let accept_states = (0..num_of_states)
        .filter(|_| rng.random_bool(accepting_probability))
        .map(StateIndex::new)
        .collect();

    Dfa::from_parts(labels, StateIndex::new(0), transitions, accept_states)
}

/// Generates a random non-deterministic automaton with the given number of
/// states and at most `outdegree` outgoing transitions per state, a fifth of
/// them epsilon transitions on average.
pub fn random_nfa(rng: &mut impl Rng, num_of_states: usize, outdegree: usize) -> Nfa {
    assert!(num_of_states > 0, "An automaton needs at least one state");

    let accept_states: Vec<String> = (0..num_of_states)
        .filter(|_| rng.random_bool(0.3))
        .map(|i| format!("s{i}"))
        .collect();
    let mut description = AutomatonDescription::new("s0", accept_states);

    for from in 0..num_of_states {
        for _ in 0..rng.random_range(0..=outdegree) {
            let label = match rng.random_range(0..5) {
                0 => Label::Epsilon,
                1 | 2 => Label::ZERO,
                _ => Label::ONE,
            };
            let to = rng.random_range(0..num_of_states);

            description.add_transition(format!("s{from}"), label, format!("s{to}"));
        }
    }

    Nfa::new(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    use fsa_utilities::random_test;
    use test_log::test;

    #[test]
    fn test_random_dfa_round_trip() {
        random_test(100, |rng| {
            let dfa = random_dfa(rng, 8, 0.4);
            let copy = Dfa::new(dfa.to_description()).unwrap();

            assert_eq!(copy.num_of_states(), dfa.num_of_states());
            assert_eq!(copy.accepts("0110"), dfa.accepts("0110"));
        });
    }

    #[test]
    fn test_random_nfa() {
        random_test(100, |rng| {
            let nfa = random_nfa(rng, 8, 3);
            assert!(nfa.num_of_states() >= 1);
            assert_eq!(nfa.state_label(nfa.initial_state_index()), "s0");
        });
    }
}
