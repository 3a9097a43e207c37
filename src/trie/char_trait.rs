use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Trait for types that can serve as atomic units of a trie edge label.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: keys store units by value
/// - `Eq + Ord`: comparing edge keys and listing children in sorted order
/// - `Hash`: children are kept in a hash map keyed by edge key
/// - `Debug`: debug printing of nodes
pub trait TrieChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> TrieChar for T {}

/// The label on an edge from a parent to a child.
///
/// Always non-empty. A plain trie uses one unit per key, a compressed trie
/// concatenates the units of a collapsed chain.
pub type EdgeKey<C> = SmallVec<[C; 8]>;
