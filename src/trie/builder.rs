use smallvec::SmallVec;

use super::char_trait::TrieChar;
use super::node::TrieNode;

/// Units of a word, inline for words of typical dictionary length.
pub type Units<C> = SmallVec<[C; 24]>;

/// A word that can be split into trie units.
///
/// Strings split into `char`s; slices, vectors and arrays of any [`TrieChar`]
/// split into their elements. Accepted by [`Builder::add_word`], [`build_trie`]
/// and the membership testers.
pub trait IntoWord<C: TrieChar> {
    /// Splits this word into its units.
    fn into_units(self) -> Units<C>;
}

macro_rules! str_word {
    ($($t:ty),*) => {
        $(impl IntoWord<char> for $t {
            fn into_units(self) -> Units<char> {
                self.chars().collect()
            }
        })*
    };
}

// `&&str` and `&String` come from iterating over `[&str; N]` and `Vec<String>`.
str_word!(&str, &&str, &String);

impl<C: TrieChar> IntoWord<C> for &[C] {
    fn into_units(self) -> Units<C> {
        SmallVec::from_slice(self)
    }
}

impl<C: TrieChar> IntoWord<C> for &Vec<C> {
    fn into_units(self) -> Units<C> {
        SmallVec::from_slice(self)
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn into_units(self) -> Units<C> {
        SmallVec::from_vec(self)
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn into_units(self) -> Units<C> {
        self.into_iter().collect()
    }
}

/// A builder for plain (one unit per edge) tries.
///
/// Words are expected in lexicographically sorted order, but the order is not
/// checked and does not change the result. Adding the same word twice has no
/// further effect.
#[derive(Debug)]
pub struct Builder<C: TrieChar> {
    root: TrieNode<C>,
}

impl<C: TrieChar> Builder<C> {
    /// Creates a builder with an empty, non-terminal root.
    pub fn new() -> Self {
        Builder {
            root: TrieNode::new(false),
        }
    }

    /// Adds a word to the trie being constructed.
    ///
    /// The word can be any type that implements [`IntoWord`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    /// The empty word marks the root terminal.
    pub fn add_word(&mut self, word: impl IntoWord<C>) {
        let word = word.into_units();
        self.add_word_slice(&word);
    }

    fn add_word_slice(&mut self, word: &[C]) {
        let mut node = &mut self.root;
        for &unit in word {
            node = node.child_or_insert(unit);
        }
        node.set_terminal();
    }

    /// Finalizes construction and returns the root node.
    pub fn build(self) -> TrieNode<C> {
        self.root
    }
}

impl<C: TrieChar> Default for Builder<C> {
    fn default() -> Self {
        Builder::new()
    }
}

/// Builds a plain trie from an iterator of words and returns the root node.
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::build_trie;
///
/// let root = build_trie(["an", "and", "ant"]);
/// let an = root.get(&['a']).and_then(|n| n.get(&['n'])).unwrap();
/// assert!(an.is_terminal());
/// assert_eq!(an.child_count(), 2);
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use libtrie::trie::builder::build_trie;
///
/// let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
/// let root = build_trie(words);
/// assert_eq!(root.node_count(), 8);
/// ```
pub fn build_trie<C, W>(words: impl IntoIterator<Item = W>) -> TrieNode<C>
where
    C: TrieChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word);
    }
    builder.build()
}
