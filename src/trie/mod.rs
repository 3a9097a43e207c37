/// Builder for plain tries from (sorted) word lists.
pub mod builder;
/// Trait for types that can serve as trie edge-label units.
pub mod char_trait;
/// Path compression of plain tries.
pub mod compress;
/// Membership testers for plain and compressed tries.
pub mod lookup;
/// Trie node, the data model shared by both encodings.
pub mod node;
/// Debug listing and word enumeration.
pub mod print;
/// Word-list loading.
pub mod wordlist;

pub use builder::{build_trie, Builder, IntoWord, Units};
pub use char_trait::{EdgeKey, TrieChar};
pub use compress::compress;
pub use lookup::{contains_compressed, contains_plain, has_prefix_plain};
pub use node::TrieNode;
pub use wordlist::{build_trie_from_file, load_words, read_words, WordListConfig, WordListError};
