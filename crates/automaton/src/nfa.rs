use std::fmt;

use bitvec::bitvec;
use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use itertools::Itertools;
use log::debug;
use log::trace;

use crate::AutomatonDescription;
use crate::Label;
use crate::StateIndex;
use crate::StateLabels;
use crate::StateSet;
use crate::Symbol;

/// A non-deterministic finite automaton over the binary alphabet with epsilon
/// transitions.
///
/// Transitions are stored per (state, label) pair as consecutive ranges of a
/// single array of target states.
#[derive(Clone)]
pub struct Nfa {
    labels: StateLabels,

    /// Offsets into `transitions_to` for every (state, label) pair, followed by a sentinel.
    offsets: Vec<usize>,
    transitions_to: Vec<StateIndex>,

    accepting: BitVec<usize, Lsb0>,
    initial_state: StateIndex,
}

impl Nfa {
    /// Constructs a non-deterministic automaton from the given description.
    ///
    /// Any description is valid, states without transitions for a label simply
    /// have no successors. States are numbered in the order in which they occur
    /// as the source of a transition, followed by the states that are only
    /// mentioned as a target, the start state or an accept state.
    pub fn new(description: AutomatonDescription) -> Nfa {
        trace!("{description:?}");

        let mut labels = StateLabels::new();
        for (from, _, _) in &description.transitions {
            labels.insert(from);
        }
        for (_, _, to) in &description.transitions {
            labels.insert(to);
        }
        let initial_state = labels.insert(&description.start);
        for state in &description.accept_states {
            labels.insert(state);
        }

        // Collect the successors of every (state, label) pair in declaration order.
        let mut successors: Vec<Vec<StateIndex>> = vec![Vec::new(); labels.len() * Label::ALL.len()];
        for (from, label, to) in &description.transitions {
            let from = labels.insert(from);
            let to = labels.insert(to);

            let targets = &mut successors[*from * Label::ALL.len() + label.index()];
            if !targets.contains(&to) {
                targets.push(to);
            }
        }

        let mut offsets = Vec::with_capacity(successors.len() + 1);
        let mut transitions_to = Vec::new();
        for targets in successors {
            offsets.push(transitions_to.len());
            transitions_to.extend(targets);
        }
        offsets.push(transitions_to.len());

        let mut accepting = bitvec![usize, Lsb0; 0; labels.len()];
        for state in &description.accept_states {
            accepting.set(*labels.insert(state), true);
        }

        debug!(
            "Constructed NFA with {} states and {} transitions",
            labels.len(),
            transitions_to.len()
        );

        Nfa {
            labels,
            offsets,
            transitions_to,
            accepting,
            initial_state,
        }
    }

    /// Returns the declared successors of the given state for the given label,
    /// in declaration order. Unknown states and absent labels have no
    /// successors.
    pub fn transition(&self, state: &str, label: Label) -> Vec<&str> {
        match self.labels.get(state) {
            Some(state) => self
                .successors(state, label)
                .iter()
                .map(|to| self.labels.label(*to))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the successors of the given state for the given label.
    pub fn successors(&self, state: StateIndex, label: Label) -> &[StateIndex] {
        let position = *state * Label::ALL.len() + label.index();
        &self.transitions_to[self.offsets[position]..self.offsets[position + 1]]
    }

    /// Returns all states reachable from the given states using only epsilon
    /// transitions, including the given states themselves.
    pub fn epsilon_closure(&self, states: impl IntoIterator<Item = StateIndex>) -> StateSet {
        let mut closure = StateSet::new(self.num_of_states());
        for state in states {
            closure.insert(state);
        }

        // Every state is inserted once, so visiting them in insertion order reaches a fixpoint.
        let mut position = 0;
        while let Some(state) = closure.get(position) {
            for to in self.successors(state, Label::Epsilon) {
                closure.insert(*to);
            }
            position += 1;
        }

        closure
    }

    /// Returns the epsilon closure of all states reachable from the frontier by
    /// reading the given symbol.
    pub fn step(&self, frontier: &StateSet, symbol: Symbol) -> StateSet {
        self.epsilon_closure(
            frontier
                .iter()
                .flat_map(|state| self.successors(state, Label::Symbol(symbol)).iter().copied()),
        )
    }

    /// Returns true iff some run of the automaton reading the input ends in an
    /// accepting state. Characters outside the alphabet have no transitions.
    pub fn accepts(&self, input: &str) -> bool {
        let mut frontier = self.epsilon_closure([self.initial_state]);
        trace!("Initial frontier {frontier:?}");

        for c in input.chars() {
            let Some(symbol) = Symbol::from_char(c) else {
                return false;
            };

            frontier = self.step(&frontier, symbol);
            trace!("Frontier after {symbol}: {frontier:?}");

            if frontier.is_empty() {
                return false;
            }
        }

        frontier.iter().any(|state| self.is_accepting(state))
    }

    /// Returns true iff the given state is accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.accepting[*state]
    }

    /// Returns the index of the initial state
    pub fn initial_state_index(&self) -> StateIndex {
        self.initial_state
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions_to.len()
    }

    /// Iterate over all states.
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> + use<> {
        (0..self.num_of_states()).map(StateIndex::new)
    }

    /// Returns the label of the given state.
    pub fn state_label(&self, state: StateIndex) -> &str {
        self.labels.label(state)
    }

    /// Returns the index of the state with the given label.
    pub fn state_index(&self, label: &str) -> Option<StateIndex> {
        self.labels.get(label)
    }
}

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of states: {}", self.num_of_states())?;
        write!(f, "Number of transitions: {}", self.num_of_transitions())
    }
}

impl fmt::Debug for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        writeln!(f, "Initial state: {}", self.state_label(self.initial_state))?;
        writeln!(
            f,
            "Accepting states: {{{}}}",
            self.iter_states()
                .filter(|state| self.is_accepting(*state))
                .map(|state| self.state_label(state))
                .format(", ")
        )?;

        for state in self.iter_states() {
            for label in Label::ALL {
                for to in self.successors(state, label) {
                    writeln!(f, "{} --[{label}]-> {}", self.state_label(state), self.state_label(*to))?;
                }
            }
        }

        Ok(())
    }
}
