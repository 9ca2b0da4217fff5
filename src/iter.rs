//! Iteration over the member sequences of a trie.
//!
//! This module provides lazy depth-first enumeration of a trie's members,
//! together with the `FromIterator` and `Extend` plumbing that the
//! functional transforms are built on. Iteration order is unspecified: the
//! trie models a set of sequences, not an ordered collection.

use std::hash::Hash;
use std::iter::FromIterator;
use std::sync::Arc;

use crate::node::TrieNode;
use crate::trie::Trie;

/// A lazy iterator over the member sequences of a trie, yielding each as an
/// owned `Vec<E>`.
///
/// Created by [`Trie::iter`]. The iterator is finite and restartable:
/// calling `iter` again starts a fresh traversal.
///
/// # Examples
///
/// ```
/// use seqtrie::Trie;
/// use std::collections::HashSet;
///
/// let trie: Trie<i32> = vec![vec![1, 2], vec![3]].into_iter().collect();
///
/// let members: HashSet<Vec<i32>> = trie.iter().collect();
/// assert_eq!(members.len(), 2);
/// assert!(members.contains(&vec![1, 2]));
/// ```
pub struct Iter<'a, E> {
    /// Depth-first stack of pending nodes, each with the element path
    /// leading to it from the traversal origin.
    stack: Vec<(&'a TrieNode<E>, Vec<E>)>,
}

impl<'a, E: Clone> Iter<'a, E> {
    // Starts a traversal at the given node; `None` yields nothing.
    pub(crate) fn from_node(node: Option<&'a TrieNode<E>>) -> Self {
        Iter {
            stack: node.map(|n| (n, Vec::new())).into_iter().collect(),
        }
    }
}

impl<'a, E: Clone> Iterator for Iter<'a, E> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            for (element, child) in &node.children {
                let mut child_path = path.clone();
                child_path.push(element.clone());
                self.stack.push((child.as_ref(), child_path));
            }

            if node.is_terminal {
                return Some(path);
            }
        }

        None
    }
}

/// An owning iterator over the member sequences of a trie.
///
/// Created by the `IntoIterator` implementation for `Trie<E>`. Node storage
/// stays shared with any other trie value holding it; only element values
/// are cloned into the yielded sequences.
pub struct IntoIter<E> {
    stack: Vec<(Arc<TrieNode<E>>, Vec<E>)>,
}

impl<E: Clone> Iterator for IntoIter<E> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            for (element, child) in &node.children {
                let mut child_path = path.clone();
                child_path.push(element.clone());
                self.stack.push((Arc::clone(child), child_path));
            }

            if node.is_terminal {
                return Some(path);
            }
        }

        None
    }
}

impl<E: Clone + Eq + Hash> Trie<E> {
    /// Returns a lazy iterator over the member sequences.
    ///
    /// Each member is yielded exactly once, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2, 3], vec![4, 5]].into_iter().collect();
    /// assert_eq!(trie.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::from_node(Some(&self.root))
    }
}

impl<'a, E: Clone + Eq + Hash> IntoIterator for &'a Trie<E> {
    type Item = Vec<E>;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Clone + Eq + Hash> IntoIterator for Trie<E> {
    type Item = Vec<E>;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            stack: vec![(self.root, Vec::new())],
        }
    }
}

impl<E, S> FromIterator<S> for Trie<E>
where
    E: Clone + Eq + Hash,
    S: IntoIterator<Item = E>,
{
    /// Builds a trie from a collection of sequences. Duplicate sequences
    /// collapse, per set semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2], vec![1, 2], vec![3]].into_iter().collect();
    /// assert_eq!(trie.len(), 2);
    /// ```
    fn from_iter<I: IntoIterator<Item = S>>(sequences: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(sequences);
        trie
    }
}

impl<E, S> Extend<S> for Trie<E>
where
    E: Clone + Eq + Hash,
    S: IntoIterator<Item = E>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, sequences: I) {
        for sequence in sequences {
            self.insert(sequence);
        }
    }
}
