use std::fmt;

use itertools::Itertools;

use fsa_automaton::Dfa;
use fsa_automaton::StateIndex;
use fsa_utilities::TagIndex;

/// A zero sized tag for the block.
pub struct BlockTag {}

/// The index for blocks.
pub type BlockIndex = TagIndex<usize, BlockTag>;

/// A trait for partitions of the states of an automaton that expose the block
/// number for every state. Can be used to compute the quotient automaton.
///
/// The invariants are that the union of all blocks is the original set, and
/// that each block is non-empty and contains distinct elements.
pub trait Partition {
    /// Returns the block number for the given state.
    fn block_number(&self, state_index: StateIndex) -> BlockIndex;

    /// Returns the number of blocks in the partition.
    fn num_of_blocks(&self) -> usize;

    /// Returns the number of elements in the partition.
    fn len(&self) -> usize;

    /// Returns whether the partition is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true iff both partitions group the same states together,
    /// regardless of how the blocks are numbered.
    fn equal(&self, other: &impl Partition) -> bool {
        if self.len() != other.len() || self.num_of_blocks() != other.num_of_blocks() {
            return false;
        }

        // Since blocks are non-empty it suffices that the blocks of self map
        // consistently onto the blocks of other.
        let mut mapping: Vec<Option<BlockIndex>> = vec![None; self.num_of_blocks()];
        for state_index in (0..self.len()).map(StateIndex::new) {
            let other_block = other.block_number(state_index);
            match mapping[*self.block_number(state_index)] {
                None => mapping[*self.block_number(state_index)] = Some(other_block),
                Some(block) if block != other_block => return false,
                Some(_) => {}
            }
        }

        true
    }
}

/// A partition that stores its blocks explicitly, as well as the block number
/// of every state.
///
/// The order of the blocks and the order of the states inside a block are
/// kept as given, they determine how the partition is observed but not which
/// states are grouped together.
#[derive(Clone, PartialEq, Eq)]
pub struct StatePartition {
    blocks: Vec<Vec<StateIndex>>,
    block_number: Vec<BlockIndex>,
}

impl StatePartition {
    /// Creates a partition of `num_of_states` states from the given blocks.
    /// Empty blocks are dropped.
    pub fn from_blocks(blocks: Vec<Vec<StateIndex>>, num_of_states: usize) -> Self {
        let blocks: Vec<Vec<StateIndex>> = blocks.into_iter().filter(|block| !block.is_empty()).collect();

        let mut block_number = vec![BlockIndex::new(usize::MAX); num_of_states];
        for (index, block) in blocks.iter().enumerate() {
            for state in block {
                debug_assert_eq!(
                    *block_number[**state],
                    usize::MAX,
                    "State {state} occurs in multiple blocks"
                );
                block_number[**state] = BlockIndex::new(index);
            }
        }

        debug_assert!(
            block_number.iter().all(|block| **block != usize::MAX),
            "Every state should be in a block"
        );

        Self { blocks, block_number }
    }

    /// Returns the states of the given block.
    pub fn block(&self, block: BlockIndex) -> &[StateIndex] {
        &self.blocks[*block]
    }

    /// Iterates over the blocks in order.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &[StateIndex]> + '_ {
        self.blocks.iter().map(|block| block.as_slice())
    }

    /// Returns the labels of the states in every block of the given automaton.
    pub fn labels<'a>(&self, dfa: &'a Dfa) -> Vec<Vec<&'a str>> {
        self.blocks
            .iter()
            .map(|block| block.iter().map(|state| dfa.state_label(*state)).collect())
            .collect()
    }
}

impl Partition for StatePartition {
    fn block_number(&self, state_index: StateIndex) -> BlockIndex {
        self.block_number[*state_index]
    }

    fn num_of_blocks(&self) -> usize {
        self.blocks.len()
    }

    fn len(&self) -> usize {
        self.block_number.len()
    }
}

impl fmt::Debug for StatePartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.blocks
                .iter()
                .map(|block| format!("{{{}}}", block.iter().format(", ")))
                .format(", ")
        )
    }
}
