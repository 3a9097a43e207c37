//! # libtrie
//!
//! Plain and path-compressed ([radix](https://en.wikipedia.org/wiki/Radix_tree)) tries
//! over sets of strings.
//!
//! A plain trie has one unit (e.g. a `char`) per edge. Compressing it collapses every
//! chain of non-branching, non-terminal nodes into a single edge keyed by the
//! concatenation of the chain's units, which keeps the set of words the same while
//! cutting the number of nodes considerably for natural-language word lists.
//!
//! ## Features
//!
//! - **Generic over unit type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`TrieChar`](trie::TrieChar)
//! - **Owned trees**: each node owns its children, so tries can be freely moved, cloned
//!   and compared structurally
//! - **No deep recursion**: building, compressing, querying and dropping use explicit
//!   loops or work stacks, so very long words are fine
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::{build_trie, compress, contains_compressed, contains_plain};
//!
//! let plain = build_trie(["an", "and", "ant"]);
//! assert!(contains_plain("and", &plain));
//! assert!(!contains_plain("a", &plain));
//!
//! let compressed = compress(plain);
//! assert!(contains_compressed("ant", &compressed));
//! assert!(!contains_compressed("ans", &compressed));
//! assert_eq!(compressed.node_count(), 4);
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use libtrie::trie::build_trie;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
//! let trie = build_trie(words).compress();
//!
//! assert!(trie.contains_compressed([1, 2, 3]));
//! assert!(!trie.contains_compressed([1, 2, 5]));
//! ```

#![warn(missing_docs)]

/// Core trie data structure: node type, builder, compressor and membership testers.
pub mod trie;

#[cfg(test)]
mod test {
    use super::trie::{build_trie, compress, contains_compressed, contains_plain};

    const WORDS: [&str; 12] = [
        "", "ALFA", "ALFALFA", "AN", "AND", "ANT", "BRAVO", "BRAVURA", "CAR", "CART", "CAT",
        "ÅTMINSTONE",
    ];

    #[test]
    fn all_words() {
        let plain = build_trie(WORDS);
        let trie = compress(plain.clone());
        for word in WORDS {
            assert!(contains_plain(word, &plain), "{}", word);
            assert!(contains_compressed(word, &trie), "{}", word);
        }
        // test some non-words
        for word in ["A", "ALF", "ANTS", "BRAV", "CA", "ÅTMINSTON", "ÅTMINSTONES", "alfa"] {
            assert!(!contains_plain(word, &plain), "{}", word);
            assert!(!contains_compressed(word, &trie), "{}", word);
        }
        assert!(trie.is_compressed());
        assert_eq!(trie.terminal_count(), WORDS.len());
    }

    #[test]
    fn dictionary_sized_compression() {
        // Every three-letter word over a small alphabet plus a long tail per word.
        let mut words = Vec::new();
        for a in 'a'..='e' {
            for b in 'a'..='e' {
                for c in 'a'..='e' {
                    words.push(format!("{a}{b}{c}"));
                    words.push(format!("{a}{b}{c}suffix"));
                }
            }
        }
        let plain = build_trie(&words);
        let plain_nodes = plain.node_count();
        let trie = compress(plain);
        // Each "suffix" tail of six nodes becomes a single node.
        assert_eq!(plain_nodes - trie.node_count(), 125 * 5);
        assert_eq!(trie.strings(), words);
    }
}
