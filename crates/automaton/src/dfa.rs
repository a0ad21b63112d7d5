use std::fmt;

use bitvec::bitvec;
use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use itertools::Itertools;
use log::debug;
use log::trace;

use crate::AutomatonDescription;
use crate::AutomatonError;
use crate::Label;
use crate::StateIndex;
use crate::StateLabels;
use crate::Symbol;

/// A deterministic finite automaton over the binary alphabet.
///
/// States are numbered in declaration order, the order in which they first
/// occur as the source of a transition in the description. Every state has
/// exactly one successor for every symbol.
#[derive(Clone)]
pub struct Dfa {
    labels: StateLabels,

    /// The successors on zero and one for every state.
    transitions: Vec<[StateIndex; 2]>,

    /// Marks the accepting states.
    accepting: BitVec<usize, Lsb0>,

    /// The accepting states in the order in which they were given, without duplicates.
    accept_states: Vec<StateIndex>,

    /// The index of the initial state.
    initial_state: StateIndex,
}

impl Dfa {
    /// Constructs a deterministic automaton from the given description.
    ///
    /// Fails with [AutomatonError::MalformedDescription] when a transition is
    /// labelled with epsilon, a state does not have exactly one transition for
    /// every symbol, or the start state, an accept state or a transition target
    /// is not a declared state.
    pub fn new(description: AutomatonDescription) -> Result<Dfa, AutomatonError> {
        trace!("{description:?}");

        // Declare the states in the order in which they occur as source.
        let mut labels = StateLabels::new();
        for (from, _, _) in &description.transitions {
            labels.insert(from);
        }

        let mut successors: Vec<[Option<StateIndex>; 2]> = vec![[None, None]; labels.len()];
        for (from, label, to) in &description.transitions {
            let symbol = label.symbol().ok_or_else(|| {
                AutomatonError::MalformedDescription(format!(
                    "state {from} has an epsilon transition to {to}"
                ))
            })?;

            let from_index = labels.insert(from);
            let to_index = labels.get(to).ok_or_else(|| {
                AutomatonError::MalformedDescription(format!(
                    "transition {from} --[{symbol}]-> {to} leads to an undeclared state"
                ))
            })?;

            match successors[*from_index][symbol.index()] {
                Some(existing) if existing != to_index => {
                    return Err(AutomatonError::MalformedDescription(format!(
                        "state {from} has multiple transitions on symbol {symbol}"
                    )));
                }
                _ => successors[*from_index][symbol.index()] = Some(to_index),
            }
        }

        let transitions = successors
            .into_iter()
            .enumerate()
            .map(|(index, successors)| match successors {
                [Some(zero), Some(one)] => Ok([zero, one]),
                _ => Err(AutomatonError::MalformedDescription(format!(
                    "state {} does not define both a 0- and a 1-transition",
                    labels.label(StateIndex::new(index))
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let initial_state = labels.get(&description.start).ok_or_else(|| {
            AutomatonError::MalformedDescription(format!("start state {} is not declared", description.start))
        })?;

        let mut accepting = bitvec![usize, Lsb0; 0; labels.len()];
        let mut accept_states = Vec::new();
        for state in &description.accept_states {
            let index = labels.get(state).ok_or_else(|| {
                AutomatonError::MalformedDescription(format!("accept state {state} is not declared"))
            })?;

            if !accepting[*index] {
                accepting.set(*index, true);
                accept_states.push(index);
            }
        }

        debug!(
            "Constructed DFA with {} states and {} accepting states",
            labels.len(),
            accept_states.len()
        );

        Ok(Dfa {
            labels,
            transitions,
            accepting,
            accept_states,
            initial_state,
        })
    }

    /// Constructs a deterministic automaton directly from its indexed parts.
    ///
    /// The labels are given in state order, the transitions contain the zero
    /// and one successor of every state, and the accepting states are listed in
    /// their preferred order.
    pub fn from_parts(
        labels: Vec<String>,
        initial_state: StateIndex,
        transitions: Vec<[StateIndex; 2]>,
        accept_states: Vec<StateIndex>,
    ) -> Dfa {
        debug_assert_eq!(
            labels.len(),
            transitions.len(),
            "There should be a label and a pair of successors for every state"
        );
        debug_assert!(*initial_state < labels.len(), "The initial state should exist");
        debug_assert!(
            transitions.iter().flatten().all(|to| **to < labels.len()),
            "Every transition should lead to an existing state"
        );

        let mut accepting = bitvec![usize, Lsb0; 0; labels.len()];
        let accept_states = accept_states
            .into_iter()
            .filter(|state| {
                let fresh = !accepting[**state];
                accepting.set(**state, true);
                fresh
            })
            .collect();

        Dfa {
            labels: StateLabels::from_labels(labels),
            transitions,
            accepting,
            accept_states,
            initial_state,
        }
    }

    /// Returns the declared successor of the given state on the given symbol.
    ///
    /// Fails with [AutomatonError::UndefinedTransition] if the state is not
    /// declared or the symbol is not part of the alphabet.
    pub fn transition(&self, state: &str, symbol: char) -> Result<&str, AutomatonError> {
        let undefined = || AutomatonError::UndefinedTransition {
            state: state.to_string(),
            symbol,
        };

        let state_index = self.labels.get(state).ok_or_else(undefined)?;
        let symbol = Symbol::from_char(symbol).ok_or_else(undefined)?;
        Ok(self.labels.label(self.next_state(state_index, symbol)))
    }

    /// Returns true iff the automaton accepts the given input.
    ///
    /// Every character of the input must be '0' or '1', otherwise the run
    /// fails with [AutomatonError::UndefinedTransition] instead of rejecting.
    pub fn accepts(&self, input: &str) -> Result<bool, AutomatonError> {
        let final_state = input.chars().try_fold(self.initial_state, |state, c| {
            let symbol = Symbol::from_char(c).ok_or_else(|| AutomatonError::UndefinedTransition {
                state: self.state_label(state).to_string(),
                symbol: c,
            })?;

            Ok::<_, AutomatonError>(self.next_state(state, symbol))
        })?;

        Ok(self.is_accepting(final_state))
    }

    /// Returns the successor of the given state on the given symbol.
    pub fn next_state(&self, state: StateIndex, symbol: Symbol) -> StateIndex {
        self.transitions[*state][symbol.index()]
    }

    /// Returns true iff the given state is accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.accepting[*state]
    }

    /// Returns the accepting states in the order in which they were given.
    pub fn accept_states(&self) -> &[StateIndex] {
        &self.accept_states
    }

    /// Returns the index of the initial state
    pub fn initial_state_index(&self) -> StateIndex {
        self.initial_state
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.transitions.len()
    }

    /// Iterate over all states in declaration order.
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

    /// Returns the labels of all states in declaration order.
    pub fn labels(&self) -> &[String] {
        self.labels.labels()
    }

    /// Returns the disjoint union of both automata, keeping the initial state
    /// of `self`. The states of `other` are placed after the states of `self`,
    /// the returned index is the initial state of `other` in the union.
    pub fn merge_disjoint(&self, other: &Dfa) -> (Dfa, StateIndex) {
        let offset = self.num_of_states();
        let shift = |state: StateIndex| StateIndex::new(*state + offset);

        let labels = self.labels().iter().chain(other.labels()).cloned().collect();
        let transitions = self
            .transitions
            .iter()
            .copied()
            .chain(other.transitions.iter().map(|[zero, one]| [shift(*zero), shift(*one)]))
            .collect();
        let accept_states = self
            .accept_states
            .iter()
            .copied()
            .chain(other.accept_states.iter().map(|state| shift(*state)))
            .collect();

        (
            Dfa::from_parts(labels, self.initial_state, transitions, accept_states),
            shift(other.initial_state),
        )
    }

    /// Returns a description from which an equivalent automaton can be constructed.
    pub fn to_description(&self) -> AutomatonDescription {
        let mut description = AutomatonDescription::new(
            self.state_label(self.initial_state),
            self.accept_states.iter().map(|state| self.state_label(*state)),
        );

        for state in self.iter_states() {
            for symbol in Symbol::ALPHABET {
                description.add_transition(
                    self.state_label(state),
                    Label::Symbol(symbol),
                    self.state_label(self.next_state(state, symbol)),
                );
            }
        }

        description
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of states: {}", self.num_of_states())?;
        write!(f, "Number of accepting states: {}", self.accept_states.len())
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        writeln!(f, "Initial state: {}", self.state_label(self.initial_state))?;
        writeln!(
            f,
            "Accepting states: {{{}}}",
            self.accept_states.iter().map(|state| self.state_label(*state)).format(", ")
        )?;

        for state in self.iter_states() {
            for symbol in Symbol::ALPHABET {
                writeln!(
                    f,
                    "{} --[{symbol}]-> {}",
                    self.state_label(state),
                    self.state_label(self.next_state(state, symbol))
                )?;
            }
        }

        Ok(())
    }
}
