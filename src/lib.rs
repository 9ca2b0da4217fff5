//! # Sequence Trie Set
//!
//! A value-semantic set of element sequences backed by a trie with
//! copy-on-write structural sharing.
//!
//! This crate provides [`Trie`], the prefix-indexed analogue of a hash
//! set: it stores a finite set of sequences of some element type `E`
//! (anything `Clone + Eq + Hash`), and its defining operations are
//! membership, insertion, removal and prefix-completion lookup. Full set
//! algebra (union, intersection, symmetric difference, subtraction and the
//! subset/superset/disjoint tests) and functional transforms (`map`,
//! `flat_map`, `filter`) are layered on top, all preserving set semantics:
//! duplicates collapse and no ordering is guaranteed.
//!
//! ## Features
//!
//! - **Value semantics**: cloning a trie is O(1); mutating one value never
//!   shows through another value that shared its storage
//! - **Structural sharing**: unchanged subtrees stay physically shared
//!   between clones, and mutation clones only the nodes on its write path
//! - **Prefix completions**: lazily enumerate the suffixes of every member
//!   extending a given prefix
//! - **Set algebra**: lock-step node-graph merges that reuse shared
//!   subtrees instead of re-inserting members one by one
//!
//! ## Example
//!
//! ```rust
//! use seqtrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert(vec![1, 2, 3]);
//! trie.insert(vec![1, 2, 5, 6]);
//! trie.insert(vec![3, 4, 5]);
//!
//! assert!(trie.contains(&[1, 2, 3]));
//! assert_eq!(trie.len(), 3);
//!
//! // Every member starting [1, 2], by its suffix.
//! let mut suffixes: Vec<Vec<i32>> = trie.completions(&[1, 2]).collect();
//! suffixes.sort();
//! assert_eq!(suffixes, vec![vec![3], vec![5, 6]]);
//!
//! // Set algebra over the member sets.
//! let other: Trie<i32> = vec![vec![3, 4, 5], vec![7]].into_iter().collect();
//! assert_eq!(trie.intersection(&other).len(), 1);
//! ```

mod completions;
mod iter;
mod node;
mod set_ops;
mod trie;

// Re-export public types
pub use crate::completions::Completions;
pub use crate::iter::{IntoIter, Iter};
pub use crate::trie::Trie;
