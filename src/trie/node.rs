use std::fmt;
use std::mem;

use hashbrown::hash_map;
use hashbrown::HashMap;

use super::char_trait::{EdgeKey, TrieChar};

/// A node in a plain or compressed trie.
///
/// Each node exclusively owns its children. The root is owned by the caller.
/// Cloning, comparing, formatting and dropping walk the tree with a heap stack,
/// so a trie as deep as its longest word is handled without recursion.
pub struct TrieNode<C: TrieChar> {
    children: HashMap<EdgeKey<C>, TrieNode<C>>,
    terminal: bool,
}

/// An iterator over the `(edge key, child)` pairs of a [`TrieNode`].
///
/// Iteration order is unspecified; use [`TrieNode::sorted_children`] for a
/// deterministic order.
#[derive(Clone)]
pub struct ChildIter<'t, C: TrieChar> {
    inner: hash_map::Iter<'t, EdgeKey<C>, TrieNode<C>>,
}

impl<'t, C: TrieChar> Iterator for ChildIter<'t, C> {
    type Item = (&'t [C], &'t TrieNode<C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, child)| (key.as_slice(), child))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}

impl<C: TrieChar> Default for TrieNode<C> {
    fn default() -> Self {
        TrieNode::new(false)
    }
}

impl<C: TrieChar> Clone for TrieNode<C> {
    // Copies are finished bottom-up, the same way `compress` rebuilds nodes.
    fn clone(&self) -> Self {
        enum Frame<'t, C: TrieChar> {
            Visit(&'t EdgeKey<C>, &'t TrieNode<C>),
            Assemble(&'t EdgeKey<C>, &'t TrieNode<C>),
        }

        let root_key = EdgeKey::new();
        let mut finished: Vec<(EdgeKey<C>, TrieNode<C>)> = Vec::new();
        let mut pending = vec![Frame::Visit(&root_key, self)];
        while let Some(frame) = pending.pop() {
            match frame {
                Frame::Visit(key, node) => {
                    pending.push(Frame::Assemble(key, node));
                    pending.extend(node.children.iter().map(|(k, child)| Frame::Visit(k, child)));
                }
                Frame::Assemble(key, node) => {
                    let start = finished.len() - node.child_count();
                    let children = finished.drain(start..).collect();
                    finished.push((key.clone(), TrieNode::with_children(node.terminal, children)));
                }
            }
        }
        finished
            .pop()
            .map(|(_, root)| root)
            .expect("The root frame always leaves exactly one result")
    }
}

impl<C: TrieChar> PartialEq for TrieNode<C> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((lhs, rhs)) = stack.pop() {
            if lhs.terminal != rhs.terminal || lhs.child_count() != rhs.child_count() {
                return false;
            }
            for (key, child) in &lhs.children {
                match rhs.children.get(key) {
                    Some(other_child) => stack.push((child, other_child)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl<C: TrieChar> Eq for TrieNode<C> {}

// Summarized rather than nested: the word list and node count identify a trie
// in test failures, and `listing()` shows the exact edge layout.
impl<C: TrieChar> fmt::Debug for TrieNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal)
            .field("nodes", &self.node_count())
            .field("words", &self.words())
            .finish()
    }
}

// Dropping a deep chain recursively would use one stack frame per level, so the
// subtree is flattened onto a heap stack and each node is dropped childless.
impl<C: TrieChar> Drop for TrieNode<C> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<C>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates a new node without children.
    ///
    /// # Arguments
    ///
    /// * `terminal` - Whether the path from the root to this node spells a member
    pub fn new(terminal: bool) -> Self {
        TrieNode {
            children: HashMap::new(),
            terminal,
        }
    }

    /// Creates a new node with the given terminal flag and children.
    pub(crate) fn with_children(terminal: bool, children: HashMap<EdgeKey<C>, TrieNode<C>>) -> Self {
        TrieNode { children, terminal }
    }

    /// Splits the node into its children map and terminal flag.
    pub(crate) fn into_parts(mut self) -> (HashMap<EdgeKey<C>, TrieNode<C>>, bool) {
        (mem::take(&mut self.children), self.terminal)
    }

    /// True if the path from the root to this node spells a member of the set.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    /// Returns the child behind the edge labelled exactly `key`.
    #[inline]
    pub fn get(&self, key: &[C]) -> Option<&TrieNode<C>> {
        self.children.get(key)
    }

    /// Inserts a child under `key`, returning the child it replaced, if any.
    ///
    /// This is a low-level operation: the caller is responsible for keeping the
    /// trie well formed (non-empty keys, no childless non-terminal nodes).
    pub fn insert(&mut self, key: &[C], child: TrieNode<C>) -> Option<TrieNode<C>> {
        debug_assert!(!key.is_empty(), "edge keys must not be empty");
        self.children.insert(EdgeKey::from_slice(key), child)
    }

    /// Returns the child for a single-unit edge, creating a non-terminal one if needed.
    pub(crate) fn child_or_insert(&mut self, unit: C) -> &mut TrieNode<C> {
        self.children
            .entry(EdgeKey::from_slice(&[unit]))
            .or_insert_with(|| TrieNode::new(false))
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        ChildIter {
            inner: self.children.iter(),
        }
    }

    /// Returns the children sorted by edge key.
    pub fn sorted_children(&self) -> Vec<(&[C], &TrieNode<C>)> {
        let mut children: Vec<_> = self.children().collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        children
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in this (sub)trie, including `self`.
    pub fn node_count(&self) -> usize {
        self.count_where(|_| true)
    }

    /// Returns the number of terminal nodes in this (sub)trie, including `self`.
    pub fn terminal_count(&self) -> usize {
        self.count_where(TrieNode::is_terminal)
    }

    fn count_where(&self, pred: impl Fn(&TrieNode<C>) -> bool) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if pred(node) {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }

    /// True if this trie is in path-compressed form.
    ///
    /// Below the root, every node must be terminal or branching, and no edge
    /// key may be empty or a prefix of a sibling key.
    pub fn is_compressed(&self) -> bool {
        let mut stack = vec![(self, true)];
        while let Some((node, is_root)) = stack.pop() {
            if !is_root && !node.terminal && node.child_count() <= 1 {
                return false;
            }
            for (key, child) in node.children() {
                if key.is_empty() {
                    return false;
                }
                let prefixes_sibling = node
                    .children
                    .keys()
                    .any(|other| other.as_slice() != key && other.starts_with(key));
                if prefixes_sibling {
                    return false;
                }
                stack.push((child, false));
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn leaf(terminal: bool) -> TrieNode<char> {
        TrieNode::new(terminal)
    }

    fn key(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn no_children() {
        let n = leaf(false);
        assert_eq!(n.children().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(n.is_leaf());
        assert!(!n.is_terminal());
    }

    #[test]
    fn insert_and_get() {
        let mut n = leaf(false);
        assert_eq!(n.insert(&key("ab"), leaf(true)), None);
        assert_eq!(n.get(&key("ab")), Some(&leaf(true)));
        assert_eq!(n.get(&key("a")), None);
        assert_eq!(n.child_count(), 1);

        let replaced = n.insert(&key("ab"), leaf(false));
        assert_eq!(replaced, Some(leaf(true)));
        assert_eq!(n.child_count(), 1);
    }

    #[test]
    fn sorted_children_are_ordered_by_key() {
        let mut n = leaf(false);
        for k in ["t", "d", "an", "b"] {
            n.insert(&key(k), leaf(true));
        }
        let keys: Vec<String> = n
            .sorted_children()
            .into_iter()
            .map(|(k, _)| k.iter().collect())
            .collect();
        assert_eq!(keys, ["an", "b", "d", "t"]);
        assert_eq!(n.children().len(), 4);
    }

    #[test]
    fn counts() {
        let mut inner = leaf(true);
        inner.insert(&key("d"), leaf(true));
        inner.insert(&key("t"), leaf(true));
        let mut root = leaf(false);
        root.insert(&key("an"), inner);

        assert_eq!(root.node_count(), 4);
        assert_eq!(root.terminal_count(), 3);
        assert_eq!(leaf(false).node_count(), 1);
        assert_eq!(leaf(false).terminal_count(), 0);
        assert_eq!(leaf(true).terminal_count(), 1);
    }

    #[test]
    fn compressed_form_detection() {
        // root -a-> (non-terminal) -n-> (terminal)
        let mut a = leaf(false);
        a.insert(&key("n"), leaf(true));
        let mut plain = leaf(false);
        plain.insert(&key("a"), a);
        assert!(!plain.is_compressed());

        let mut compressed = leaf(false);
        compressed.insert(&key("an"), leaf(true));
        assert!(compressed.is_compressed());

        // A root with a single non-terminal child chain is still fine at the root itself.
        assert!(leaf(false).is_compressed());
        assert!(leaf(true).is_compressed());
    }

    fn chain(depth: usize) -> TrieNode<char> {
        let mut node = leaf(true);
        for _ in 0..depth {
            let mut parent = leaf(false);
            parent.insert(&['x'], node);
            node = parent;
        }
        node
    }

    #[test]
    fn clone_and_compare_deep_chain() {
        let deep = chain(100_000);
        let copy = deep.clone();
        assert_eq!(copy.node_count(), 100_001);
        assert!(copy == deep);
        assert!(copy != chain(99_999));
    }

    #[test]
    fn equality_is_structural() {
        let mut a = leaf(false);
        a.insert(&key("an"), leaf(true));
        let mut b = leaf(false);
        b.insert(&key("an"), leaf(true));
        assert_eq!(a, b);

        b.insert(&key("b"), leaf(true));
        assert_ne!(a, b);

        let mut c = leaf(false);
        c.insert(&key("an"), leaf(false));
        assert_ne!(a, c);
        assert_ne!(a, leaf(true));
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn debug_summarizes_words() {
        let mut n = leaf(false);
        n.insert(&key("b"), leaf(true));
        n.insert(&key("a"), leaf(true));
        assert_eq!(
            format!("{n:?}"),
            "TrieNode { terminal: false, nodes: 3, words: [['a'], ['b']] }"
        );
    }

    #[test]
    fn sibling_prefix_keys_are_not_compressed() {
        let mut n = leaf(false);
        n.insert(&key("a"), leaf(true));
        n.insert(&key("ab"), leaf(true));
        assert!(!n.is_compressed());
    }

    #[test]
    fn childless_non_terminal_below_root_is_not_compressed() {
        let mut n = leaf(false);
        n.insert(&key("a"), leaf(true));
        n.insert(&key("b"), leaf(false));
        assert!(!n.is_compressed());
    }
}
