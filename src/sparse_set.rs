use crate::nfa::StateId;

/// A pair of sparse sets.
///
/// One set holds the active states before a character is consumed, the other
/// collects the states reached after it. Swapping them advances the search by
/// one step without reallocating.
#[derive(Clone, Debug)]
pub(crate) struct SparseSets {
    pub(crate) set1: SparseSet,
    pub(crate) set2: SparseSet,
}

impl SparseSets {
    /// Create a new pair of sparse sets where each set has the given capacity.
    pub(crate) fn new(capacity: usize) -> SparseSets {
        SparseSets {
            set1: SparseSet::new(capacity),
            set2: SparseSet::new(capacity),
        }
    }

    /// Swap set1 with set2.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.set1, &mut self.set2);
    }
}

/// A sparse set of NFA state IDs.
///
/// Insertion, membership testing and clearing are all constant time.
/// Iteration yields elements in insertion order. Based on
/// https://research.swtch.com/sparse, without the uninitialized memory.
#[derive(Clone)]
pub(crate) struct SparseSet {
    /// The number of elements currently in this set.
    len: usize,
    /// Dense contains the ids in the order in which they were inserted.
    dense: Vec<StateId>,
    /// Sparse maps ids to their location in dense.
    ///
    /// An id is in the set if and only if
    /// sparse[id] < len && id == dense[sparse[id]].
    sparse: Vec<usize>,
}

impl SparseSet {
    /// Create a new sparse set that can hold every id below `capacity`.
    pub(crate) fn new(capacity: usize) -> SparseSet {
        SparseSet {
            len: 0,
            dense: vec![0; capacity],
            sparse: vec![0; capacity],
        }
    }

    /// Returns the capacity of this set.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.dense.len()
    }

    /// Returns the number of elements in this set.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if and only if this set is empty.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert the id into this set and return true if it was not already
    /// present.
    ///
    /// Panics if the id is not below the capacity of this set.
    #[inline]
    pub(crate) fn insert(&mut self, value: StateId) -> bool {
        assert!(
            value < self.capacity(),
            "state {} exceeds sparse set capacity of {}",
            value,
            self.capacity(),
        );
        if self.contains(value) {
            return false;
        }
        let i = self.len;
        self.dense[i] = value;
        self.sparse[value] = i;
        self.len += 1;
        true
    }

    /// Returns true if and only if this set contains the given value.
    #[inline]
    pub(crate) fn contains(&self, value: StateId) -> bool {
        match self.sparse.get(value) {
            Some(&i) => i < self.len && self.dense[i] == value,
            None => false,
        }
    }

    /// Returns the ith inserted element from this set.
    ///
    /// Panics when i >= self.len().
    #[inline]
    pub(crate) fn get(&self, i: usize) -> StateId {
        self.dense[..self.len][i]
    }

    /// Clear this set such that it has no members.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, StateId>> {
        self.dense[..self.len].iter().copied()
    }
}

impl std::fmt::Debug for SparseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let elements: Vec<StateId> = self.iter().collect();
        f.debug_tuple("SparseSet").field(&elements).finish()
    }
}
