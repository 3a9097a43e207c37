//! Example: building a Wordlist wrapper around a compressed trie.
//!
//! This shows how to create a convenient high-level API on top of the raw trie
//! node interface. The `Wordlist` struct owns a compressed root `TrieNode` and
//! provides word lookup, prefix checking, and iteration.
//!
//! Run with: cargo run --example wordlist

use libtrie::trie::{build_trie, TrieNode};

/// A convenient wrapper around a compressed trie for word validation.
struct Wordlist {
    plain: TrieNode<char>,
    compressed: TrieNode<char>,
}

impl Wordlist {
    fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let plain = build_trie(words);
        let compressed = plain.clone().compress();
        Wordlist { plain, compressed }
    }

    /// Returns true if the word is in the wordlist.
    fn is_word(&self, word: &str) -> bool {
        self.compressed.contains_compressed(word)
    }

    /// Returns true if any word in the wordlist starts with the given prefix.
    fn has_prefix(&self, prefix: &str) -> bool {
        libtrie::trie::has_prefix_plain(prefix, &self.plain)
    }

    /// Returns all words in the wordlist.
    fn all_words(&self) -> Vec<String> {
        self.compressed.strings()
    }
}

fn main() {
    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let wordlist = Wordlist::new(words);

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if wordlist.is_word(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if wordlist.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Node counts
    println!(
        "\nNodes: {} plain, {} compressed",
        wordlist.plain.node_count(),
        wordlist.compressed.node_count()
    );
    print!("\nCompressed trie:\n{}", wordlist.compressed.listing());

    // List all words
    println!("\nAll words: {:?}", wordlist.all_words());
}
