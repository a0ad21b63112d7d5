use log::info;

use fsa_automaton::Dfa;
use fsa_utilities::Timing;

use crate::Partition;
use crate::StatePartition;
use crate::moore_refinement;
use crate::quotient_dfa;

/// Minimizes the given deterministic automaton, returning the quotient with
/// respect to the coarsest partition of language equivalent states.
pub fn minimize(dfa: &Dfa, timing: &mut Timing) -> Dfa {
    minimize_with_partition(dfa, timing).0
}

/// Same as [minimize], but also returns the final partition, whose blocks
/// correspond to the states of the minimized automaton.
pub fn minimize_with_partition(dfa: &Dfa, timing: &mut Timing) -> (Dfa, StatePartition) {
    let partition = moore_refinement(dfa, timing);

    let mut quotient_time = timing.start("quotient");
    let result = quotient_dfa(dfa, &partition);
    quotient_time.finish();

    info!(
        "Minimized {} states into {} states",
        dfa.num_of_states(),
        partition.num_of_blocks()
    );
    (result, partition)
}
