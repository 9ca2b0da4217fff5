//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! working with the sequence-set trie data structure.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::node::TrieNode;

/// A set of element sequences backed by a trie with copy-on-write structural
/// sharing.
///
/// `Trie<E>` is the prefix-indexed analogue of a hash set: it stores a finite
/// set of sequences of `E`, supports membership, insertion, removal and
/// prefix-completion lookup, and layers full set algebra and functional
/// transforms on top.
///
/// The trie is a value: `clone` is cheap (the root handle is shared), and a
/// mutation on one value never shows through another value that shared its
/// storage at the time of the clone. Each mutating operation clones only the
/// nodes on its write path whose storage is still shared, leaving untouched
/// subtrees physically shared.
///
/// # Examples
///
/// ```
/// use seqtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert(vec![1, 2, 3]);
/// trie.insert(vec![1, 2, 5, 6]);
///
/// assert!(trie.contains(&[1, 2, 3]));
/// assert_eq!(trie.len(), 2);
///
/// let suffixes: Vec<Vec<i32>> = trie.completions(&[1, 2]).collect();
/// assert_eq!(suffixes.len(), 2);
/// ```
pub struct Trie<E> {
    /// The root node of the trie.
    pub(crate) root: Arc<TrieNode<E>>,

    /// The number of member sequences stored in the trie.
    len: usize,
}

impl<E> Clone for Trie<E> {
    fn clone(&self) -> Self {
        Trie {
            root: Arc::clone(&self.root),
            len: self.len,
        }
    }
}

impl<E> Trie<E> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: Arc::new(TrieNode::new()),
            len: 0,
        }
    }

    /// Returns the number of member sequences stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert(vec![1, 2, 3]);
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie contains no member sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.is_empty());
    ///
    /// trie.insert(vec![1, 2, 3]);
    /// assert!(!trie.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the trie, removing all member sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(vec![1, 2, 3]);
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = Arc::new(TrieNode::new());
        self.len = 0;
    }

    // Builds a trie directly from a root node, counting its members.
    // Used by the set-algebra constructors.
    pub(crate) fn from_root(root: Arc<TrieNode<E>>) -> Self {
        let len = root.subtree_count();
        Trie { root, len }
    }
}

impl<E: Clone + Eq + Hash> Trie<E> {
    /// Inserts a sequence into the trie, returning whether it was newly
    /// inserted.
    ///
    /// Walks (or creates) the child chain matching the sequence element by
    /// element and marks the final node as a member. Inserting a sequence
    /// that is already present changes nothing observable and returns
    /// `false`. Nodes along the path whose storage is shared with another
    /// trie value are cloned before being written to.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert(vec![1, 2, 3]));
    /// assert!(!trie.insert(vec![1, 2, 3]));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert<I>(&mut self, sequence: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let inserted = insert_into(&mut self.root, sequence.into_iter());

        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Removes a sequence from the trie.
    ///
    /// If the sequence is a member, clears its terminal marking, prunes any
    /// node left with no children and no terminal marking (up to but not
    /// including the root), and returns the removed sequence. If the
    /// sequence is not a member, returns `None` and leaves the trie
    /// untouched, without cloning any shared storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(vec![1, 2, 3]);
    ///
    /// assert_eq!(trie.remove(&[1, 2, 3]), Some(vec![1, 2, 3]));
    /// assert_eq!(trie.remove(&[1, 2, 3]), None);
    /// assert!(trie.is_empty());
    /// ```
    pub fn remove(&mut self, sequence: &[E]) -> Option<Vec<E>> {
        // A membership probe up front keeps non-member removal free of
        // copy-on-write cloning.
        if !self.contains(sequence) {
            return None;
        }

        remove_from(&mut self.root, sequence);
        self.len -= 1;

        Some(sequence.to_vec())
    }

    /// Returns `true` if the sequence is a member of the trie.
    ///
    /// Pure traversal; never mutates or clones.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(vec![1, 2, 3]);
    ///
    /// assert!(trie.contains(&[1, 2, 3]));
    /// assert!(!trie.contains(&[1, 2]));
    /// assert!(!trie.contains(&[2, 2, 3]));
    /// ```
    pub fn contains(&self, sequence: &[E]) -> bool {
        self.root
            .descend(sequence)
            .map_or(false, |node| node.is_terminal)
    }
}

// Recursive helper for insert. Clones each node on the path while its
// storage is shared, then walks or creates the child for the next element.
fn insert_into<E, I>(node: &mut Arc<TrieNode<E>>, mut sequence: I) -> bool
where
    E: Clone + Eq + Hash,
    I: Iterator<Item = E>,
{
    let node = Arc::make_mut(node);

    match sequence.next() {
        Some(element) => {
            let child = node
                .children
                .entry(element)
                .or_insert_with(|| Arc::new(TrieNode::new()));
            insert_into(child, sequence)
        }
        None => {
            let was_member = node.is_terminal;
            node.is_terminal = true;
            !was_member
        }
    }
}

// Recursive helper for remove. The caller has already verified membership,
// so the path is known to exist. Returns whether the node should be pruned
// by its parent; the root itself is never pruned.
fn remove_from<E>(node: &mut Arc<TrieNode<E>>, sequence: &[E]) -> bool
where
    E: Clone + Eq + Hash,
{
    let node = Arc::make_mut(node);

    match sequence.split_first() {
        Some((element, rest)) => {
            let prune_child = match node.children.get_mut(element) {
                Some(child) => remove_from(child, rest),
                None => false,
            };

            if prune_child {
                node.children.remove(element);
            }
        }
        None => node.is_terminal = false,
    }

    node.is_dead()
}

// Structural equality over the canonical (pruned, one-element-per-edge)
// node graph decides member-set equality.
fn eq_nodes<E: Clone + Eq + Hash>(a: &Arc<TrieNode<E>>, b: &Arc<TrieNode<E>>) -> bool {
    if Arc::ptr_eq(a, b) {
        return true;
    }

    a.is_terminal == b.is_terminal
        && a.children.len() == b.children.len()
        && a.children
            .iter()
            .all(|(element, a_child)| match b.children.get(element) {
                Some(b_child) => eq_nodes(a_child, b_child),
                None => false,
            })
}

/// Equality is defined on the member-sequence sets: two tries are equal iff
/// they contain exactly the same sequences, independent of insertion history.
impl<E: Clone + Eq + Hash> PartialEq for Trie<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && eq_nodes(&self.root, &other.root)
    }
}

impl<E: Clone + Eq + Hash> Eq for Trie<E> {}

/// Hashing is consistent with equality: per-member hashes are combined with
/// a commutative operation, so the result does not depend on traversal order.
impl<E: Clone + Eq + Hash> Hash for Trie<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined: u64 = 0;

        for sequence in self.iter() {
            let mut hasher = DefaultHasher::new();
            sequence.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }

        state.write_usize(self.len);
        state.write_u64(combined);
    }
}

impl<E> Default for Trie<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the member set as a braced, comma-separated list of sequences,
/// the way the standard set types render. The order is unspecified;
/// consumers should compare as sets.
impl<E: Clone + Eq + Hash + fmt::Debug> fmt::Debug for Trie<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
