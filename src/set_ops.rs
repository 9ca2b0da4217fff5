//! Set algebra and functional transforms.
//!
//! The set operations are defined on the flattened member-sequence sets of
//! their operands, never on node shape: two tries holding the same members
//! combine identically regardless of construction history. Internally they
//! walk both node graphs in lock step, merging children keyed by the same
//! element and reusing whole shared subtrees via `Arc` where possible.

use std::hash::Hash;
use std::sync::Arc;

use crate::node::TrieNode;
use crate::trie::Trie;

impl<E: Clone + Eq + Hash> Trie<E> {
    /// Returns a new trie containing every sequence that is a member of
    /// `self` or `other` (or both).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let a: Trie<i32> = vec![vec![1, 2], vec![3, 4]].into_iter().collect();
    /// let b: Trie<i32> = vec![vec![3, 4], vec![5]].into_iter().collect();
    ///
    /// let expected: Trie<i32> = vec![vec![1, 2], vec![3, 4], vec![5]].into_iter().collect();
    /// assert_eq!(a.union(&b), expected);
    /// ```
    pub fn union(&self, other: &Trie<E>) -> Trie<E> {
        Trie::from_root(union_nodes(&self.root, &other.root))
    }

    /// Returns a new trie containing every sequence that is a member of
    /// both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let a: Trie<i32> = vec![vec![1, 2], vec![3, 4]].into_iter().collect();
    /// let b: Trie<i32> = vec![vec![3, 4], vec![5]].into_iter().collect();
    ///
    /// let expected: Trie<i32> = vec![vec![3, 4]].into_iter().collect();
    /// assert_eq!(a.intersection(&b), expected);
    /// ```
    pub fn intersection(&self, other: &Trie<E>) -> Trie<E> {
        match intersect_nodes(&self.root, &other.root) {
            Some(root) => Trie::from_root(root),
            None => Trie::new(),
        }
    }

    /// Returns a new trie containing every sequence that is a member of
    /// exactly one of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let a: Trie<i32> = vec![vec![1, 2], vec![3, 4]].into_iter().collect();
    /// let b: Trie<i32> = vec![vec![3, 4], vec![5]].into_iter().collect();
    ///
    /// let expected: Trie<i32> = vec![vec![1, 2], vec![5]].into_iter().collect();
    /// assert_eq!(a.symmetric_difference(&b), expected);
    /// ```
    pub fn symmetric_difference(&self, other: &Trie<E>) -> Trie<E> {
        match xor_nodes(Some(&self.root), Some(&other.root)) {
            Some(root) => Trie::from_root(root),
            None => Trie::new(),
        }
    }

    /// Returns a new trie containing the members of `self` minus the given
    /// sequences.
    ///
    /// Accepts any collection of sequences; to subtract another trie, pass
    /// its iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2], vec![3, 4], vec![5]].into_iter().collect();
    ///
    /// let expected: Trie<i32> = vec![vec![1, 2]].into_iter().collect();
    /// assert_eq!(trie.subtract(vec![vec![3, 4], vec![5], vec![9]]), expected);
    /// ```
    pub fn subtract<I, S>(&self, sequences: I) -> Trie<E>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = E>,
    {
        let mut remaining = self.clone();

        for sequence in sequences {
            let sequence: Vec<E> = sequence.into_iter().collect();
            remaining.remove(&sequence);
        }

        remaining
    }

    /// Returns `true` if every member of `self` is in the given collection
    /// of sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2], vec![3, 4]].into_iter().collect();
    ///
    /// assert!(trie.is_subset(vec![vec![1, 2], vec![3, 4], vec![5]]));
    /// assert!(!trie.is_subset(vec![vec![1, 2], vec![5]]));
    /// ```
    pub fn is_subset<I, S>(&self, sequences: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = E>,
    {
        let other: Trie<E> = sequences.into_iter().collect();
        subset_nodes(&self.root, &other.root)
    }

    /// Returns `true` if every member of `other` is a member of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let big: Trie<i32> = vec![vec![1, 2], vec![3, 4]].into_iter().collect();
    /// let small: Trie<i32> = vec![vec![1, 2]].into_iter().collect();
    ///
    /// assert!(big.is_superset(&small));
    /// assert!(!small.is_superset(&big));
    /// ```
    pub fn is_superset(&self, other: &Trie<E>) -> bool {
        subset_nodes(&other.root, &self.root)
    }

    /// Returns `true` if `self` and `other` have no member in common.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let a: Trie<i32> = vec![vec![1, 2], vec![3, 4]].into_iter().collect();
    /// let b: Trie<i32> = vec![vec![5], vec![1, 3]].into_iter().collect();
    /// let c: Trie<i32> = vec![vec![5], vec![1, 2]].into_iter().collect();
    ///
    /// assert!(a.is_disjoint(&b));
    /// assert!(!a.is_disjoint(&c));
    /// ```
    pub fn is_disjoint(&self, other: &Trie<E>) -> bool {
        disjoint_nodes(&self.root, &other.root)
    }

    /// Applies `transform` to every member sequence and collects the
    /// results into a new trie. Duplicate results collapse, per set
    /// semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2, 3]].into_iter().collect();
    ///
    /// let doubled = trie.map(|seq| seq.into_iter().map(|e| e * 2).collect());
    /// assert!(doubled.contains(&[2, 4, 6]));
    /// ```
    pub fn map<T, F>(&self, transform: F) -> Trie<T>
    where
        T: Clone + Eq + Hash,
        F: FnMut(Vec<E>) -> Vec<T>,
    {
        self.iter().map(transform).collect()
    }

    /// Applies `transform` to every member sequence; each call produces
    /// zero or more result sequences, and the union of everything produced
    /// becomes the new trie.
    ///
    /// Both an `Option<Vec<T>>` (insert or drop a single sequence) and an
    /// owned `Trie<T>` satisfy the transform's return bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2], vec![2, 3]].into_iter().collect();
    ///
    /// // Keep only the sequences starting odd, doubling them.
    /// let kept = trie.flat_map(|seq| {
    ///     if seq[0] % 2 == 1 {
    ///         Some(seq.into_iter().map(|e| e * 2).collect())
    ///     } else {
    ///         None
    ///     }
    /// });
    ///
    /// let expected: Trie<i32> = vec![vec![2, 4]].into_iter().collect();
    /// assert_eq!(kept, expected);
    /// ```
    pub fn flat_map<T, I, F>(&self, mut transform: F) -> Trie<T>
    where
        T: Clone + Eq + Hash,
        I: IntoIterator<Item = Vec<T>>,
        F: FnMut(Vec<E>) -> I,
    {
        let mut collected = Trie::new();

        for member in self.iter() {
            for produced in transform(member) {
                collected.insert(produced);
            }
        }

        collected
    }

    /// Returns a new trie retaining only the member sequences satisfying
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2], vec![2, 3]].into_iter().collect();
    ///
    /// let odd_first = trie.filter(|seq| seq[0] % 2 == 1);
    /// let expected: Trie<i32> = vec![vec![1, 2]].into_iter().collect();
    /// assert_eq!(odd_first, expected);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Trie<E>
    where
        P: FnMut(&[E]) -> bool,
    {
        self.iter()
            .filter(|member| predicate(member.as_slice()))
            .collect()
    }
}

// Lock-step union of two subtrees. Children present on only one side are
// reused wholesale; children present on both sides recurse.
fn union_nodes<E: Clone + Eq + Hash>(
    a: &Arc<TrieNode<E>>,
    b: &Arc<TrieNode<E>>,
) -> Arc<TrieNode<E>> {
    if Arc::ptr_eq(a, b) {
        return Arc::clone(a);
    }

    let mut merged = TrieNode {
        children: a.children.clone(),
        is_terminal: a.is_terminal || b.is_terminal,
    };

    for (element, b_child) in &b.children {
        if let Some(slot) = merged.children.get_mut(element) {
            let combined = union_nodes(slot, b_child);
            *slot = combined;
        } else {
            merged.children.insert(element.clone(), Arc::clone(b_child));
        }
    }

    Arc::new(merged)
}

// Lock-step intersection; `None` means the subtree holds no common member
// and is pruned, keeping the result canonical.
fn intersect_nodes<E: Clone + Eq + Hash>(
    a: &Arc<TrieNode<E>>,
    b: &Arc<TrieNode<E>>,
) -> Option<Arc<TrieNode<E>>> {
    if Arc::ptr_eq(a, b) {
        return Some(Arc::clone(a));
    }

    let mut common = TrieNode {
        children: Default::default(),
        is_terminal: a.is_terminal && b.is_terminal,
    };

    for (element, a_child) in &a.children {
        if let Some(b_child) = b.children.get(element) {
            if let Some(shared) = intersect_nodes(a_child, b_child) {
                common.children.insert(element.clone(), shared);
            }
        }
    }

    if common.is_dead() {
        None
    } else {
        Some(Arc::new(common))
    }
}

// Lock-step symmetric difference. A subtree present on one side only passes
// through untouched; identical shared subtrees cancel outright.
fn xor_nodes<E: Clone + Eq + Hash>(
    a: Option<&Arc<TrieNode<E>>>,
    b: Option<&Arc<TrieNode<E>>>,
) -> Option<Arc<TrieNode<E>>> {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (Some(only), None) | (None, Some(only)) => return Some(Arc::clone(only)),
        (None, None) => return None,
    };

    if Arc::ptr_eq(a, b) {
        return None;
    }

    let mut uncommon = TrieNode {
        children: Default::default(),
        is_terminal: a.is_terminal != b.is_terminal,
    };

    for (element, a_child) in &a.children {
        if let Some(child) = xor_nodes(Some(a_child), b.children.get(element)) {
            uncommon.children.insert(element.clone(), child);
        }
    }

    for (element, b_child) in &b.children {
        if !a.children.contains_key(element) {
            uncommon
                .children
                .insert(element.clone(), Arc::clone(b_child));
        }
    }

    if uncommon.is_dead() {
        None
    } else {
        Some(Arc::new(uncommon))
    }
}

// True iff every member of `a`'s subtree is a member of `b`'s subtree.
fn subset_nodes<E: Clone + Eq + Hash>(a: &Arc<TrieNode<E>>, b: &Arc<TrieNode<E>>) -> bool {
    if Arc::ptr_eq(a, b) {
        return true;
    }

    if a.is_terminal && !b.is_terminal {
        return false;
    }

    a.children
        .iter()
        .all(|(element, a_child)| match b.children.get(element) {
            Some(b_child) => subset_nodes(a_child, b_child),
            None => false,
        })
}

// True iff the two subtrees share no member.
fn disjoint_nodes<E: Clone + Eq + Hash>(a: &Arc<TrieNode<E>>, b: &Arc<TrieNode<E>>) -> bool {
    if a.is_terminal && b.is_terminal {
        return false;
    }

    a.children
        .iter()
        .all(|(element, a_child)| match b.children.get(element) {
            Some(b_child) => disjoint_nodes(a_child, b_child),
            None => true,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(sequences: Vec<Vec<i32>>) -> Trie<i32> {
        sequences.into_iter().collect()
    }

    #[test]
    fn test_union_reuses_shared_subtrees() {
        let a = trie(vec![vec![1, 2, 3], vec![3, 4, 5]]);
        let b = a.clone();

        let merged = a.union(&b);

        assert_eq!(merged, a);
        // Identical handles short-circuit to subtree reuse.
        assert!(Arc::ptr_eq(&merged.root, &a.root));
    }

    #[test]
    fn test_union_combines_terminal_markings() {
        let a = trie(vec![vec![1, 2]]);
        let b = trie(vec![vec![1, 2, 3], vec![1]]);

        let merged = a.union(&b);

        assert_eq!(merged, trie(vec![vec![1], vec![1, 2], vec![1, 2, 3]]));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_intersection_prunes_dead_branches() {
        let a = trie(vec![vec![1, 2, 3], vec![4, 5]]);
        let b = trie(vec![vec![1, 2, 9], vec![4, 5]]);

        let common = a.intersection(&b);

        assert_eq!(common, trie(vec![vec![4, 5]]));
        // The diverging [1, 2, _] branch leaves no residue behind.
        assert!(!common.root.children.contains_key(&1));
    }

    #[test]
    fn test_intersection_is_shape_independent() {
        // Same member set built along different insertion histories.
        let mut a = trie(vec![vec![1, 2], vec![1, 2, 3]]);
        a.remove(&[1, 2, 3]);

        let b = trie(vec![vec![1, 2], vec![9]]);

        assert_eq!(a.intersection(&b), trie(vec![vec![1, 2]]));
    }

    #[test]
    fn test_symmetric_difference_cancels_shared_storage() {
        let a = trie(vec![vec![1, 2, 3], vec![3, 4, 5]]);
        let b = a.clone();

        assert!(a.symmetric_difference(&b).is_empty());
    }

    #[test]
    fn test_subtract_accepts_trie_iterator() {
        let a = trie(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let b = trie(vec![vec![3, 4], vec![7, 8]]);

        assert_eq!(a.subtract(b.iter()), trie(vec![vec![1, 2], vec![5, 6]]));
    }

    #[test]
    fn test_subtract_leaves_operand_untouched() {
        let a = trie(vec![vec![1, 2], vec![3, 4]]);
        let removed = a.subtract(vec![vec![1, 2]]);

        assert_eq!(a.len(), 2);
        assert!(a.contains(&[1, 2]));
        assert_eq!(removed, trie(vec![vec![3, 4]]));
    }

    #[test]
    fn test_subset_of_empty_and_empty_subset() {
        let empty = Trie::<i32>::new();
        let some = trie(vec![vec![1]]);

        assert!(empty.is_subset(Vec::<Vec<i32>>::new()));
        assert!(empty.is_subset(some.iter()));
        assert!(!some.is_subset(Vec::<Vec<i32>>::new()));
        assert!(some.is_superset(&empty));
    }

    #[test]
    fn test_prefix_member_is_not_subset_of_extension() {
        // [1, 2] shares a path with [1, 2, 3] but is a distinct member.
        let short = trie(vec![vec![1, 2]]);
        let long = trie(vec![vec![1, 2, 3]]);

        assert!(!short.is_subset(long.iter()));
        assert!(!long.is_superset(&short));
        assert!(short.is_disjoint(&long));
    }

    #[test]
    fn test_map_collapses_duplicates() {
        let source = trie(vec![vec![1, 2], vec![3, 4]]);

        let collapsed = source.map(|_| vec![0]);

        assert_eq!(collapsed.len(), 1);
        assert!(collapsed.contains(&[0]));
    }

    #[test]
    fn test_flat_map_with_trie_transform() {
        let source = trie(vec![vec![1, 2, 3], vec![2, 3, 4]]);

        // Each member contributes itself and itself shifted by one.
        let spread = source.flat_map(|seq| {
            let shifted: Vec<i32> = seq.iter().map(|e| e + 1).collect();
            trie(vec![seq, shifted])
        });

        let expected = trie(vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
        assert_eq!(spread, expected);
    }

    #[test]
    fn test_flat_map_with_optional_transform() {
        let source = trie(vec![vec![1, 2, 3], vec![3, 4, 5], vec![2, 3, 4]]);

        let kept = source.flat_map(|seq| {
            if seq[0] % 2 == 1 {
                Some(seq.into_iter().map(|e| e * 2).collect())
            } else {
                None
            }
        });

        assert_eq!(kept, trie(vec![vec![2, 4, 6], vec![6, 8, 10]]));
    }

    #[test]
    fn test_filter_retains_matching_members() {
        let source = trie(vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);

        let odd_first = source.filter(|seq| seq[0] % 2 == 1);

        assert_eq!(odd_first, trie(vec![vec![1, 2, 3], vec![3, 4, 5]]));
    }
}
