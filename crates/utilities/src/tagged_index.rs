use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use std::ops::Deref;

/// An index of type `T` that is tagged with a zero sized type `Tag`, such that
/// indices into different collections (states, blocks) cannot be mixed up.
///
/// The traits are implemented manually since deriving them would require the
/// tag itself to implement them as well.
pub struct TagIndex<T, Tag> {
    index: T,
    marker: PhantomData<fn() -> Tag>,
}

impl<T: Copy, Tag> TagIndex<T, Tag> {
    /// Creates a new index from the underlying value.
    pub fn new(index: T) -> Self {
        Self {
            index,
            marker: PhantomData,
        }
    }

    /// Returns the underlying value.
    pub fn value(&self) -> T {
        self.index
    }
}

impl<T, Tag> Deref for TagIndex<T, Tag> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.index
    }
}

impl<T: Copy, Tag> Clone for TagIndex<T, Tag> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, Tag> Copy for TagIndex<T, Tag> {}

impl<T: Default + Copy, Tag> Default for TagIndex<T, Tag> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, Tag> PartialEq for TagIndex<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T: Eq, Tag> Eq for TagIndex<T, Tag> {}

impl<T: PartialOrd, Tag> PartialOrd for TagIndex<T, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.index.partial_cmp(&other.index)
    }
}

impl<T: Ord, Tag> Ord for TagIndex<T, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T: Hash, Tag> Hash for TagIndex<T, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state)
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for TagIndex<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.index)
    }
}

impl<T: fmt::Display, Tag> fmt::Display for TagIndex<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstTag;

    type FirstIndex = TagIndex<usize, FirstTag>;

    #[test]
    fn test_tag_index_ordering() {
        let a = FirstIndex::new(3);
        let b = FirstIndex::new(5);

        assert!(a < b);
        assert_eq!(*a.max(b), 5);
        assert_eq!(a, FirstIndex::new(3));
        assert_eq!(format!("{a} {b:?}"), "3 5");
    }
}
