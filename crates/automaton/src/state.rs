use rustc_hash::FxHashMap;

use fsa_utilities::TagIndex;

/// A unique type for the states.
pub struct StateTag;

/// The index for a state.
pub type StateIndex = TagIndex<usize, StateTag>;

/// Assigns consecutive indices to state labels in the order in which they are
/// first inserted, and keeps the labels to map indices back.
#[derive(Clone, Debug, Default)]
pub struct StateLabels {
    labels: Vec<String>,
    indices: FxHashMap<String, StateIndex>,
}

impl StateLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table from labels that are already in index order. When a
    /// label occurs multiple times a lookup by label yields its first index.
    pub fn from_labels(labels: Vec<String>) -> Self {
        let mut indices = FxHashMap::default();
        for (index, label) in labels.iter().enumerate() {
            indices.entry(label.clone()).or_insert(StateIndex::new(index));
        }

        Self { labels, indices }
    }

    /// Returns the index of the given label, introducing a new index when the
    /// label was not seen before.
    pub fn insert(&mut self, label: &str) -> StateIndex {
        if let Some(index) = self.indices.get(label) {
            return *index;
        }

        let index = StateIndex::new(self.labels.len());
        self.labels.push(label.to_string());
        self.indices.insert(label.to_string(), index);
        index
    }

    /// Returns the index of the given label, if it is known.
    pub fn get(&self, label: &str) -> Option<StateIndex> {
        self.indices.get(label).copied()
    }

    /// Returns the label of the given state.
    pub fn label(&self, state: StateIndex) -> &str {
        &self.labels[*state]
    }

    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true iff there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns all labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
