//! Generalized suffix trie index
//!
//! Every non-empty suffix of every corpus word is inserted into one shared
//! trie. Each node records, as a bitmap of word ids, which words have a
//! suffix passing through it. Walking a pattern from the root therefore
//! lands on a node whose owners are exactly the words containing the
//! pattern.
//!
//! ## Architecture
//!
//! - `builder`: Deduplicates words and inserts their suffixes
//! - `suffix_index`: Immutable index and its queries
//! - `node`: Trie node type
//! - `stats`: Human-readable index statistics
//! - `types`: Shared type definitions

pub mod builder;
pub mod node;
pub mod stats;
pub mod suffix_index;
pub mod types;

pub use builder::SuffixIndexBuilder;
pub use node::TrieNode;
pub use suffix_index::SuffixIndex;
pub use types::{IndexStats, SearchMode, Symbol, WordId};
