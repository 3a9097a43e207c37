use std::fmt;

use super::char_trait::TrieChar;
use super::node::TrieNode;

/// An indented, human-readable listing of a trie's edges.
///
/// Created by [`TrieNode::listing`]. Each edge is printed on its own line,
/// children in key order, prefixed by a marker repeated once per level of
/// depth: `*` when the child is terminal, `-` otherwise. Edge keys over `char`
/// are printed as text, other unit types with their `Debug` form.
pub struct Listing<'t, C: TrieChar> {
    root: &'t TrieNode<C>,
}

impl<C: TrieChar + KeyDisplay> fmt::Display for Listing<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(usize, &[C], &TrieNode<C>)> = Vec::new();
        push_sorted_children(&mut stack, 1, self.root);
        while let Some((depth, key, node)) = stack.pop() {
            let marker = if node.is_terminal() { "*" } else { "-" };
            write!(f, "{} ", marker.repeat(depth))?;
            C::fmt_key(key, f)?;
            writeln!(f)?;
            push_sorted_children(&mut stack, depth + 1, node);
        }
        Ok(())
    }
}

fn push_sorted_children<'t, C: TrieChar>(
    stack: &mut Vec<(usize, &'t [C], &'t TrieNode<C>)>,
    depth: usize,
    node: &'t TrieNode<C>,
) {
    // Reversed so the smallest key is popped first.
    stack.extend(
        node.sorted_children()
            .into_iter()
            .rev()
            .map(|(key, child)| (depth, key, child)),
    );
}

/// Formatting of edge keys in a [`Listing`].
pub trait KeyDisplay: Sized {
    /// Writes `key` to the formatter.
    fn fmt_key(key: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl KeyDisplay for char {
    fn fmt_key(key: &[char], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        key.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

macro_rules! debug_key_display {
    ($($t:ty),*) => {
        $(impl KeyDisplay for $t {
            fn fmt_key(key: &[$t], f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{key:?}")
            }
        })*
    };
}

debug_key_display!(u8, u16, u32, u64);

impl<C: TrieChar> TrieNode<C> {
    /// Returns a [`Display`](fmt::Display) value listing the edges of this trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::builder::build_trie;
    ///
    /// let trie = build_trie(["an", "and", "ant"]).compress();
    /// assert_eq!(trie.listing().to_string(), "* an\n** d\n** t\n");
    /// ```
    pub fn listing(&self) -> Listing<'_, C> {
        Listing { root: self }
    }

    /// Returns every word represented by this trie, in sorted order.
    ///
    /// Works for plain and compressed tries alike, since edge keys are
    /// concatenated along each path.
    pub fn words(&self) -> Vec<Vec<C>> {
        let mut words = Vec::new();
        let mut stack: Vec<(Vec<C>, &TrieNode<C>)> = vec![(Vec::new(), self)];
        while let Some((prefix, node)) = stack.pop() {
            if node.is_terminal() {
                words.push(prefix.clone());
            }
            for (key, child) in node.sorted_children().into_iter().rev() {
                let mut path = prefix.clone();
                path.extend_from_slice(key);
                stack.push((path, child));
            }
        }
        words
    }
}

impl TrieNode<char> {
    /// Returns every word represented by this trie as a `String`, in sorted order.
    pub fn strings(&self) -> Vec<String> {
        self.words()
            .into_iter()
            .map(|word| word.into_iter().collect())
            .collect()
    }
}
