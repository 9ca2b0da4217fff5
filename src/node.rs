//! Internal node implementation for the sequence trie.
//!
//! This module contains the internal `TrieNode` structure that forms the
//! backbone of the trie. `TrieNode` instances are always wrapped in an `Arc`
//! so that unmodified subtrees can be shared between trie values; mutation
//! goes through `Arc::make_mut`, which clones a node only while its storage
//! is shared.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Internal node type for the sequence trie.
///
/// This type is not exposed in the public API. Each node represents one
/// position in the prefix space: the map of children is keyed by the next
/// element, and `is_terminal` marks whether the root-to-node path is itself
/// a member of the set.
///
/// Invariant: a non-root node with no children and `is_terminal == false`
/// carries no information and must not exist; removal prunes such nodes
/// immediately. Because every edge carries exactly one element, the pruned
/// node graph is a canonical form of the member set.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<E> {
    /// Child nodes, one entry per distinct next element.
    pub children: HashMap<E, Arc<TrieNode<E>>>,

    /// Whether the path from the root to this node is a member sequence.
    pub is_terminal: bool,
}

impl<E> TrieNode<E> {
    /// Creates a new node with no children and no terminal marking.
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            is_terminal: false,
        }
    }

    /// Returns the number of member sequences in the subtree rooted here,
    /// i.e. the number of terminal nodes reachable from this node.
    pub fn subtree_count(&self) -> usize {
        let mut count = if self.is_terminal { 1 } else { 0 };

        for child in self.children.values() {
            count += child.subtree_count();
        }

        count
    }

    /// Returns whether this node is a leaf node (has no children).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node is prunable: no children and not terminal.
    pub fn is_dead(&self) -> bool {
        self.children.is_empty() && !self.is_terminal
    }
}

impl<E> Default for TrieNode<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Eq + Hash> TrieNode<E> {
    /// Walks the child chain for `path`, returning the node it ends at if
    /// the whole path exists.
    pub fn descend(&self, path: &[E]) -> Option<&TrieNode<E>> {
        let mut current = self;

        for element in path {
            match current.children.get(element) {
                Some(child) => current = child,
                None => return None,
            }
        }

        Some(current)
    }
}
