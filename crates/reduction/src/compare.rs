use fsa_automaton::Dfa;
use fsa_utilities::Timing;

use crate::Partition;
use crate::moore_refinement;

/// Returns true iff both deterministic automata accept the same language.
///
/// The automata are merged into their disjoint union, after which the initial
/// states should end up in the same block of the coarsest partition.
pub fn equivalent_dfa(left: &Dfa, right: &Dfa, timing: &mut Timing) -> bool {
    let mut time_merge = timing.start("merge dfa");
    let (merged, right_initial) = left.merge_disjoint(right);
    time_merge.finish();

    let partition = moore_refinement(&merged, timing);
    partition.block_number(merged.initial_state_index()) == partition.block_number(right_initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    use fsa_automaton::AutomatonDescription;
    use test_log::test;

    #[test]
    fn test_equivalent_dfa_with_different_labels() {
        let even_ones = Dfa::new(
            AutomatonDescription::new("e", ["e"])
                .with_state("e", "e", "o")
                .with_state("o", "o", "e"),
        )
        .unwrap();
        let even_ones_redundant = Dfa::new(
            AutomatonDescription::new("p", ["p", "r"])
                .with_state("p", "r", "q")
                .with_state("q", "q", "r")
                .with_state("r", "p", "q"),
        )
        .unwrap();
        let odd_ones = Dfa::new(
            AutomatonDescription::new("e", ["o"])
                .with_state("e", "e", "o")
                .with_state("o", "o", "e"),
        )
        .unwrap();

        let mut timing = Timing::new();
        assert!(equivalent_dfa(&even_ones, &even_ones_redundant, &mut timing));
        assert!(!equivalent_dfa(&even_ones, &odd_ones, &mut timing));
    }
}
