use smallvec::SmallVec;

use super::builder::IntoWord;
use super::char_trait::TrieChar;
use super::node::TrieNode;

/// Tests whether `word` is a member of a plain (one unit per edge) trie.
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::build_trie;
/// use libtrie::trie::lookup::contains_plain;
///
/// let trie = build_trie(["an", "and", "ant"]);
/// assert!(contains_plain("and", &trie));
/// assert!(!contains_plain("a", &trie));
/// ```
pub fn contains_plain<C: TrieChar>(word: impl IntoWord<C>, trie: &TrieNode<C>) -> bool {
    walk_plain(&word.into_units(), trie).is_some_and(TrieNode::is_terminal)
}

/// Returns true if some member of a plain trie starts with `prefix`.
///
/// The empty prefix is accepted unless the trie represents no words.
pub fn has_prefix_plain<C: TrieChar>(prefix: impl IntoWord<C>, trie: &TrieNode<C>) -> bool {
    walk_plain(&prefix.into_units(), trie)
        .is_some_and(|node| node.is_terminal() || !node.is_leaf())
}

fn walk_plain<'t, C: TrieChar>(word: &[C], trie: &'t TrieNode<C>) -> Option<&'t TrieNode<C>> {
    word.iter().try_fold(trie, |node, &unit| node.get(&[unit]))
}

/// Tests whether `word` is a member of a compressed trie.
///
/// At every node the children's keys are compared against the start of the
/// remaining word, so each step costs O(number of children × key length)
/// regardless of how long the word is. In a well-formed compressed trie at
/// most one key can match; if sibling keys do prefix each other, every matching
/// key is tried, shortest first, before the word is rejected.
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::build_trie;
/// use libtrie::trie::lookup::contains_compressed;
///
/// let trie = build_trie(["an", "and", "ant"]).compress();
/// assert!(contains_compressed("ant", &trie));
/// assert!(!contains_compressed("anda", &trie));
/// ```
pub fn contains_compressed<C: TrieChar>(word: impl IntoWord<C>, trie: &TrieNode<C>) -> bool {
    let word = word.into_units();
    let mut stack = vec![(trie, 0)];
    while let Some((node, offset)) = stack.pop() {
        let rest = &word[offset..];
        if rest.is_empty() {
            if node.is_terminal() {
                return true;
            }
            continue;
        }
        let mut matches: SmallVec<[(usize, &TrieNode<C>); 2]> = node
            .children()
            .filter(|(key, _)| key.first() == rest.first() && rest.starts_with(key))
            .map(|(key, child)| (key.len(), child))
            .collect();
        // Longest first on the stack, so the shortest matching key is explored first.
        matches.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        stack.extend(matches.into_iter().map(|(len, child)| (child, offset + len)));
    }
    false
}

impl<C: TrieChar> TrieNode<C> {
    /// Tests membership in this trie read as a plain trie. See [`contains_plain`].
    pub fn contains_plain(&self, word: impl IntoWord<C>) -> bool {
        contains_plain(word, self)
    }

    /// Tests membership in this trie read as a compressed trie. See [`contains_compressed`].
    pub fn contains_compressed(&self, word: impl IntoWord<C>) -> bool {
        contains_compressed(word, self)
    }
}
