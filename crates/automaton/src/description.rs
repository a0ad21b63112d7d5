use crate::Label;

/// An in-memory description of a finite automaton over the binary alphabet:
/// its transitions as (source, label, target) triples in declaration order,
/// the start state and the accepting states.
///
/// The same description is used for deterministic and non-deterministic
/// automata, [crate::Dfa::new] imposes the additional well-formedness
/// requirements of a deterministic automaton.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutomatonDescription {
    pub transitions: Vec<(String, Label, String)>,
    pub start: String,
    pub accept_states: Vec<String>,
}

impl AutomatonDescription {
    /// Creates a description without transitions.
    pub fn new<S, I>(start: S, accept_states: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            transitions: Vec::new(),
            start: start.into(),
            accept_states: accept_states.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a single transition.
    pub fn add_transition(&mut self, from: impl Into<String>, label: Label, to: impl Into<String>) {
        self.transitions.push((from.into(), label, to.into()));
    }

    /// Adds a single transition and returns the description.
    pub fn with_transition(mut self, from: impl Into<String>, label: Label, to: impl Into<String>) -> Self {
        self.add_transition(from, label, to);
        self
    }

    /// Declares a deterministic state with its zero and one successors.
    pub fn with_state(self, state: impl Into<String>, on_zero: impl Into<String>, on_one: impl Into<String>) -> Self {
        let state = state.into();
        self.with_transition(state.clone(), Label::ZERO, on_zero)
            .with_transition(state, Label::ONE, on_one)
    }

    /// Declares the successor set of a state for the given label.
    pub fn with_successors<I>(mut self, from: impl Into<String>, label: Label, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let from = from.into();
        for target in targets {
            self.add_transition(from.clone(), label, target);
        }
        self
    }
}
