use log::debug;
use log::trace;
use rustc_hash::FxHashMap;

use fsa_automaton::Dfa;
use fsa_automaton::StateIndex;
use fsa_automaton::Symbol;
use fsa_utilities::Timing;

use crate::BlockIndex;
use crate::Partition;
use crate::StatePartition;

/// The blocks reached by the zero and the one transition of a state, in the
/// order of [Symbol::ALPHABET].
pub type Signature = [BlockIndex; 2];

/// Returns the partition that separates the accepting states, in the order in
/// which they were given, from the remaining states in declaration order. When
/// either group is empty the partition consists of a single block.
pub fn initial_partition(dfa: &Dfa) -> StatePartition {
    let accepting = dfa.accept_states().to_vec();
    let rejecting = dfa.iter_states().filter(|state| !dfa.is_accepting(*state)).collect();

    StatePartition::from_blocks(vec![accepting, rejecting], dfa.num_of_states())
}

/// Returns the signature of the given state with respect to the partition.
pub fn state_signature(dfa: &Dfa, partition: &impl Partition, state: StateIndex) -> Signature {
    Symbol::ALPHABET.map(|symbol| partition.block_number(dfa.next_state(state, symbol)))
}

/// Performs a single refinement step: states stay together iff they are in
/// the same block and have the same signature. The new blocks are numbered in
/// the order in which they are first encountered when iterating over the
/// states in declaration order.
///
/// The result is always a refinement of the given partition.
pub fn refine(dfa: &Dfa, partition: &impl Partition) -> StatePartition {
    let mut id: FxHashMap<(BlockIndex, Signature), BlockIndex> = FxHashMap::default();
    let mut blocks: Vec<Vec<StateIndex>> = Vec::new();

    for state in dfa.iter_states() {
        let signature = state_signature(dfa, partition, state);
        trace!(
            "State {} in block {} has signature {signature:?}",
            dfa.state_label(state),
            partition.block_number(state)
        );

        let fresh = BlockIndex::new(blocks.len());
        let block = *id.entry((partition.block_number(state), signature)).or_insert(fresh);
        if block == fresh {
            blocks.push(Vec::new());
        }

        blocks[*block].push(state);
    }

    StatePartition::from_blocks(blocks, dfa.num_of_states())
}

/// Computes the coarsest partition of the states such that states in the same
/// block accept exactly the same strings, using Moore's partition refinement.
///
/// Starting from the [initial_partition] the partition is refined until a
/// round no longer splits any block. The returned partition lists the states
/// of every block in declaration order.
pub fn moore_refinement(dfa: &Dfa, timing: &mut Timing) -> StatePartition {
    let mut time = timing.start("refinement");

    let mut partition = initial_partition(dfa);
    debug!("Initial partition {partition:?}");

    let mut iteration = 0;
    loop {
        let refined = refine(dfa, &partition);
        iteration += 1;
        debug!("Iteration {iteration}, found {} blocks", refined.num_of_blocks());

        // Refinement never merges blocks, so an equal number of blocks means nothing was split.
        let stable = refined.num_of_blocks() == partition.num_of_blocks();
        debug_assert!(
            !stable || refined.equal(&partition),
            "A refinement with the same number of blocks should be equal"
        );

        partition = refined;
        if stable {
            break;
        }
    }

    time.finish();
    partition
}
