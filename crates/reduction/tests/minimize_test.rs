use test_case::test_case;

use fsa_automaton::AutomatonDescription;
use fsa_automaton::Dfa;
use fsa_automaton::random_dfa;
use fsa_reduction::Partition;
use fsa_reduction::equivalent_dfa;
use fsa_reduction::initial_partition;
use fsa_reduction::minimize;
use fsa_reduction::minimize_with_partition;
use fsa_reduction::moore_refinement;
use fsa_reduction::state_signature;
use fsa_utilities::Timing;
use fsa_utilities::random_test;

fn starts_with_0() -> Dfa {
    Dfa::new(
        AutomatonDescription::new("S", ["A"])
            .with_state("S", "A", "B")
            .with_state("A", "A", "A")
            .with_state("B", "B", "B"),
    )
    .unwrap()
}

fn divisible_by_3() -> Dfa {
    Dfa::new(
        AutomatonDescription::new("r0", ["r0"])
            .with_state("r0", "r0", "r1")
            .with_state("r1", "r2", "r0")
            .with_state("r2", "r1", "r2"),
    )
    .unwrap()
}

fn starts_with_010() -> Dfa {
    Dfa::new(
        AutomatonDescription::new("A", ["F"])
            .with_state("A", "B", "C")
            .with_state("B", "C", "D")
            .with_state("C", "C", "C")
            .with_state("D", "F", "E")
            .with_state("E", "E", "E")
            .with_state("F", "F", "F"),
    )
    .unwrap()
}

/// Accepts the binary numbers that are divisible by n, every remainder is a
/// distinct state.
fn divisible_by(n: usize) -> Dfa {
    let mut description = AutomatonDescription::new("r0", ["r0"]);
    for remainder in 0..n {
        description = description.with_state(
            format!("r{remainder}"),
            format!("r{}", (2 * remainder) % n),
            format!("r{}", (2 * remainder + 1) % n),
        );
    }

    Dfa::new(description).unwrap()
}

/// Returns all binary strings up to and including the given length.
fn all_inputs(max_length: usize) -> Vec<String> {
    let mut inputs = vec![String::new()];
    let mut previous = vec![String::new()];
    for _ in 0..max_length {
        previous = previous
            .iter()
            .flat_map(|prefix| [format!("{prefix}0"), format!("{prefix}1")])
            .collect();
        inputs.extend(previous.iter().cloned());
    }

    inputs
}

fn assert_same_language(left: &Dfa, right: &Dfa) {
    for input in all_inputs(8) {
        assert_eq!(
            left.accepts(&input),
            right.accepts(&input),
            "Languages differ on {input:?}:\n{left:?}\n{right:?}"
        );
    }
}

#[test_case(starts_with_0(), &[&["A"], &["S", "B"]] ; "starts with 0")]
#[test_case(divisible_by_3(), &[&["r0"], &["r1", "r2"]] ; "divisible by 3")]
#[test_case(starts_with_010(), &[&["F"], &["A", "B", "C", "D", "E"]] ; "starts with 010")]
fn test_initial_partition(dfa: Dfa, expected: &[&[&str]]) {
    assert_eq!(initial_partition(&dfa).labels(&dfa), expected);
}

#[test_case(starts_with_0(), &[[0, 1], [0, 0], [1, 1]] ; "starts with 0")]
#[test_case(divisible_by_3(), &[[0, 1], [1, 0], [1, 1]] ; "divisible by 3")]
#[test_case(starts_with_010(), &[[1, 1], [1, 1], [1, 1], [0, 1], [1, 1], [0, 0]] ; "starts with 010")]
fn test_initial_signatures(dfa: Dfa, expected: &[[usize; 2]]) {
    let partition = initial_partition(&dfa);

    let signatures: Vec<[usize; 2]> = dfa
        .iter_states()
        .map(|state| state_signature(&dfa, &partition, state).map(|block| block.value()))
        .collect();
    assert_eq!(signatures, expected);
}

#[test_case(starts_with_0(), &[&["S"], &["A"], &["B"]] ; "starts with 0")]
#[test_case(divisible_by_3(), &[&["r0"], &["r1"], &["r2"]] ; "divisible by 3")]
#[test_case(starts_with_010(), &[&["A"], &["B"], &["C", "E"], &["D"], &["F"]] ; "starts with 010")]
fn test_minimized_partition(dfa: Dfa, expected: &[&[&str]]) {
    let partition = moore_refinement(&dfa, &mut Timing::new());
    assert_eq!(partition.labels(&dfa), expected);
}

#[test]
fn test_minimized_starts_with_010() {
    let dfa = starts_with_010();
    let (minimized, partition) = minimize_with_partition(&dfa, &mut Timing::new());

    assert_eq!(partition.num_of_blocks(), 5);
    assert_eq!(minimized.num_of_states(), 5);
    assert_eq!(minimized.labels(), ["A", "B", "CE", "D", "F"]);
    assert_eq!(minimized.state_label(minimized.initial_state_index()), "A");
    assert_eq!(
        minimized.accept_states().iter().map(|state| minimized.state_label(*state)).collect::<Vec<_>>(),
        vec!["F"]
    );

    for (state, zero, one) in [
        ("A", "B", "CE"),
        ("B", "CE", "D"),
        ("CE", "CE", "CE"),
        ("D", "F", "CE"),
        ("F", "F", "F"),
    ] {
        assert_eq!(minimized.transition(state, '0'), Ok(zero));
        assert_eq!(minimized.transition(state, '1'), Ok(one));
    }

    assert_same_language(&dfa, &minimized);
}

#[test_case(starts_with_0() ; "starts with 0")]
#[test_case(divisible_by_3() ; "divisible by 3")]
#[test_case(starts_with_010() ; "starts with 010")]
#[test_case(divisible_by(13) ; "divisible by 13")]
fn test_minimize_twice(dfa: Dfa) {
    let mut timing = Timing::new();
    let once = minimize(&dfa, &mut timing);
    let (twice, partition) = minimize_with_partition(&once, &mut timing);

    // The second round starts from a minimal automaton.
    assert!(partition.iter_blocks().all(|block| block.len() == 1));
    assert_eq!(twice.num_of_states(), once.num_of_states());
    assert_eq!(twice.labels(), once.labels());

    assert_same_language(&dfa, &once);
    assert_same_language(&once, &twice);
}

#[test]
fn test_minimize_more_than_ten_blocks() {
    let dfa = divisible_by(13);
    let partition = moore_refinement(&dfa, &mut Timing::new());

    assert_eq!(partition.num_of_blocks(), 13);
    assert!(partition.iter_blocks().all(|block| block.len() == 1));
}

#[test]
fn test_minimize_merges_redundant_copies() {
    // Two copies of the divisible by 13 automaton, only the first is reachable.
    let dfa = divisible_by(13);
    let (merged, _) = dfa.merge_disjoint(&divisible_by(13));

    let (minimized, partition) = minimize_with_partition(&merged, &mut Timing::new());
    assert_eq!(partition.num_of_blocks(), 13);
    assert!(partition.iter_blocks().all(|block| block.len() == 2));
    assert_eq!(minimized.labels()[0], "r0r0");
    assert_same_language(&dfa, &minimized);
}

#[test]
fn test_minimize_empty_input() {
    let mut timing = Timing::new();
    for dfa in [starts_with_0(), divisible_by_3(), starts_with_010()] {
        let minimized = minimize(&dfa, &mut timing);

        assert_eq!(minimized.accepts(""), Ok(dfa.is_accepting(dfa.initial_state_index())));
        assert_eq!(minimized.accepts(""), dfa.accepts(""));
    }
}

#[test]
fn test_equivalent_to_minimized() {
    let mut timing = Timing::new();
    for dfa in [starts_with_0(), divisible_by_3(), starts_with_010(), divisible_by(13)] {
        let minimized = minimize(&dfa, &mut timing);
        assert!(equivalent_dfa(&dfa, &minimized, &mut timing));
    }

    assert!(!equivalent_dfa(&starts_with_0(), &starts_with_010(), &mut timing));
    assert!(!equivalent_dfa(&divisible_by_3(), &divisible_by(13), &mut timing));
}

#[test]
fn test_random_minimize_preserves_language() {
    random_test(100, |rng| {
        let dfa = random_dfa(rng, 10, 0.4);
        let mut timing = Timing::new();

        let (minimized, partition) = minimize_with_partition(&dfa, &mut timing);
        assert_eq!(minimized.num_of_states(), partition.num_of_blocks());
        assert_same_language(&dfa, &minimized);

        let twice = minimize(&minimized, &mut timing);
        assert_eq!(twice.num_of_states(), minimized.num_of_states());
        assert!(equivalent_dfa(&minimized, &twice, &mut timing));
    });
}
