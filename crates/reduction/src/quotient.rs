use log::debug;

use fsa_automaton::Dfa;
use fsa_automaton::StateIndex;
use fsa_automaton::Symbol;

use crate::Partition;

/// Returns the quotient of the automaton with respect to the given partition,
/// with one state for every block.
///
/// The transitions of a block are those of its first state in declaration
/// order, which is sound when all states of a block agree on the blocks they
/// move to, as for the result of [crate::moore_refinement]. A block is
/// accepting iff one of its states is accepting and the block of the initial
/// state becomes the initial state. Every block is labelled by the
/// concatenation of the labels of its states in declaration order.
pub fn quotient_dfa(dfa: &Dfa, partition: &impl Partition) -> Dfa {
    let start = std::time::Instant::now();
    let to_state = |state: StateIndex| StateIndex::new(*partition.block_number(state));

    let mut labels = vec![String::new(); partition.num_of_blocks()];
    let mut transitions: Vec<Option<[StateIndex; 2]>> = vec![None; partition.num_of_blocks()];
    let mut accept_states = Vec::new();

    for state in dfa.iter_states() {
        let block = partition.block_number(state);
        debug_assert!(
            *block < partition.num_of_blocks(),
            "Quotienting assumes that the block numbers do not exceed the number of blocks"
        );

        labels[*block].push_str(dfa.state_label(state));

        let successors = Symbol::ALPHABET.map(|symbol| to_state(dfa.next_state(state, symbol)));
        match transitions[*block] {
            None => transitions[*block] = Some(successors),
            Some(representative) => debug_assert_eq!(
                representative, successors,
                "States in block {block} move to different blocks"
            ),
        }

        if dfa.is_accepting(state) {
            accept_states.push(to_state(state));
        }
    }

    // Blocks are non-empty, so every block has a representative.
    let transitions = transitions
        .into_iter()
        .enumerate()
        .map(|(block, successors)| successors.unwrap_or([StateIndex::new(block); 2]))
        .collect();
    accept_states.sort();
    accept_states.dedup();

    let result = Dfa::from_parts(labels, to_state(dfa.initial_state_index()), transitions, accept_states);
    debug!("Time quotient: {:.3}s", start.elapsed().as_secs_f64());
    result
}
