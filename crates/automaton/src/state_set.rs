use std::fmt;

use bitvec::bitvec;
use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use itertools::Itertools;

use crate::StateIndex;

/// A set of states with constant time membership that remembers the order in
/// which states were inserted.
///
/// The capacity is the number of states of the automaton, every inserted
/// index must be smaller than it.
#[derive(Clone)]
pub struct StateSet {
    /// The states in insertion order, without duplicates.
    dense: Vec<StateIndex>,
    /// Marks which states are present.
    members: BitVec<usize, Lsb0>,
}

impl StateSet {
    /// Creates an empty set for states below the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            dense: Vec::new(),
            members: bitvec![usize, Lsb0; 0; capacity],
        }
    }

    /// Inserts the given state, returns true iff it was not yet present.
    pub fn insert(&mut self, state: StateIndex) -> bool {
        if self.members[*state] {
            return false;
        }

        self.members.set(*state, true);
        self.dense.push(state);
        true
    }

    /// Returns true iff the state is in the set.
    pub fn contains(&self, state: StateIndex) -> bool {
        self.members.get(*state).is_some_and(|bit| *bit)
    }

    /// Returns the number of states in the set.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Returns true iff the set is empty.
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Returns the state at the given insertion position.
    pub fn get(&self, position: usize) -> Option<StateIndex> {
        self.dense.get(position).copied()
    }

    /// Iterates over the states in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.dense.iter().copied()
    }
}

impl PartialEq for StateSet {
    /// Two sets are equal when they contain the same states, regardless of the insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|state| other.contains(state))
    }
}

impl Eq for StateSet {}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.dense.iter().format(", "))
    }
}
