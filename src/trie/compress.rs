//! Path compression of plain tries into radix tries.

use hashbrown::HashMap;
use tracing::{debug, Level};

use super::char_trait::{EdgeKey, TrieChar};
use super::node::TrieNode;

/// Pending work for [`compress`].
enum Frame<C: TrieChar> {
    /// A child reached through `key` that has not been compressed yet.
    Visit { key: EdgeKey<C>, node: TrieNode<C> },
    /// Rebuilds a node from the last `child_count` finished children.
    Assemble {
        key: EdgeKey<C>,
        terminal: bool,
        child_count: usize,
    },
}

/// Compresses a trie, collapsing each chain of non-terminal single-child nodes
/// into one edge whose key is the concatenation of the chain's keys.
///
/// The input may be plain or already (partially) compressed; sibling keys must
/// not be prefixes of each other. The represented set of words is unchanged and
/// the result never has more nodes than the input. The root is never folded
/// away, and neither is a terminal node, so the operation is idempotent.
///
/// Runs in O(number of nodes) using an explicit work stack, so very deep tries
/// do not exhaust the call stack.
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::build_trie;
/// use libtrie::trie::compress::compress;
///
/// let trie = compress(build_trie(["an", "and", "ant"]));
/// let an = trie.get(&['a', 'n']).unwrap();
/// assert!(an.is_terminal());
/// assert_eq!(an.child_count(), 2);
/// assert_eq!(trie.node_count(), 4);
/// ```
pub fn compress<C: TrieChar>(trie: TrieNode<C>) -> TrieNode<C> {
    let nodes_before = tracing::enabled!(Level::DEBUG).then(|| trie.node_count());

    let mut finished: Vec<(EdgeKey<C>, TrieNode<C>)> = Vec::new();
    let mut pending = Vec::new();
    schedule(&mut pending, EdgeKey::new(), trie);

    while let Some(frame) = pending.pop() {
        match frame {
            Frame::Visit { key, node } => {
                let (key, node) = fold_chain(key, node);
                schedule(&mut pending, key, node);
            }
            Frame::Assemble {
                key,
                terminal,
                child_count,
            } => {
                let start = finished.len() - child_count;
                let children: HashMap<_, _> = finished.drain(start..).collect();
                debug_assert_eq!(children.len(), child_count, "compressed sibling keys collided");
                finished.push((key, TrieNode::with_children(terminal, children)));
            }
        }
    }

    let (_, root) = finished
        .pop()
        .expect("The root frame always leaves exactly one result");
    debug_assert!(finished.is_empty());

    if let Some(nodes_before) = nodes_before {
        debug!(
            nodes_before,
            nodes_after = root.node_count(),
            terminals = root.terminal_count(),
            "compressed trie"
        );
    }
    root
}

/// Queues `node` for reassembly under `key` and queues each of its children.
fn schedule<C: TrieChar>(pending: &mut Vec<Frame<C>>, key: EdgeKey<C>, node: TrieNode<C>) {
    let (children, terminal) = node.into_parts();
    pending.push(Frame::Assemble {
        key,
        terminal,
        child_count: children.len(),
    });
    pending.extend(
        children
            .into_iter()
            .map(|(key, node)| Frame::Visit { key, node }),
    );
}

/// Extends `key` through the maximal chain of non-terminal single-child nodes
/// starting at `node`, returning the extended key and the node that ends the chain.
fn fold_chain<C: TrieChar>(mut key: EdgeKey<C>, mut node: TrieNode<C>) -> (EdgeKey<C>, TrieNode<C>) {
    while !node.is_terminal() && node.child_count() == 1 {
        let (children, _) = node.into_parts();
        let (child_key, child) = children
            .into_iter()
            .next()
            .expect("Single-child node always has a child");
        key.extend_from_slice(&child_key);
        node = child;
    }
    (key, node)
}

impl<C: TrieChar> TrieNode<C> {
    /// Consumes this trie and returns its path-compressed form. See [`compress`].
    pub fn compress(self) -> TrieNode<C> {
        compress(self)
    }
}
