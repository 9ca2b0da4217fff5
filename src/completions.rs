//! Prefix completion lookup.
//!
//! This module provides the `Completions` type, a lazy iterator over the
//! suffixes of every member sequence extending a given prefix.

use std::hash::Hash;

use crate::iter::Iter;
use crate::trie::Trie;

/// A lazy iterator over the completions of a prefix.
///
/// Created by [`Trie::completions`]. Yields, for every member sequence that
/// extends the prefix, the portion of that member after the prefix. The
/// yield order is unspecified; callers that need determinism must sort.
///
/// # Examples
///
/// ```
/// use seqtrie::Trie;
/// use std::collections::HashSet;
///
/// let trie: Trie<i32> = vec![
///     vec![1, 2, 3],
///     vec![1, 2, 3, 4],
///     vec![1, 2, 5, 6],
///     vec![3, 4, 5],
/// ]
/// .into_iter()
/// .collect();
///
/// let suffixes: HashSet<Vec<i32>> = trie.completions(&[1, 2]).collect();
/// let expected: HashSet<Vec<i32>> = vec![vec![3], vec![3, 4], vec![5, 6]]
///     .into_iter()
///     .collect();
///
/// assert_eq!(suffixes, expected);
/// ```
pub struct Completions<'a, E> {
    walker: Iter<'a, E>,
}

impl<'a, E: Clone> Iterator for Completions<'a, E> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walker.next()
    }
}

impl<E: Clone + Eq + Hash> Trie<E> {
    /// Returns a lazy iterator over the suffixes of all member sequences
    /// that extend `prefix`.
    ///
    /// If no member extends the prefix, the iterator is empty. When the
    /// prefix is itself a member, the empty suffix is yielded: the
    /// completions of `prefix` are exactly the sequences `s` for which
    /// `prefix ++ s` is a member, so `completions(&[])` enumerates the
    /// whole member set.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqtrie::Trie;
    ///
    /// let trie: Trie<i32> = vec![vec![1, 2], vec![1, 2, 3]].into_iter().collect();
    ///
    /// // [1, 2] is a member, so the empty suffix is included.
    /// let mut suffixes: Vec<Vec<i32>> = trie.completions(&[1, 2]).collect();
    /// suffixes.sort();
    /// assert_eq!(suffixes, vec![vec![], vec![3]]);
    ///
    /// assert_eq!(trie.completions(&[9]).count(), 0);
    /// ```
    pub fn completions<'a>(&'a self, prefix: &[E]) -> Completions<'a, E> {
        Completions {
            walker: Iter::from_node(self.root.descend(prefix)),
        }
    }
}
