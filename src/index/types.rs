//! Types shared by the suffix index builder and its queries

use serde::{Deserialize, Serialize};

/// Identifier of a distinct corpus word.
///
/// Ids are assigned in lexicographic order of the words, so iterating ids
/// in ascending order yields words in sorted order.
pub type WordId = u32;

/// A single trie edge label (one Unicode scalar value)
pub type Symbol = char;

/// How the owners found at the end of a trie walk are turned into matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Return the owners of the terminal node as-is.
    ///
    /// Every suffix of every word is inserted, so this is already exact
    /// substring search.
    #[default]
    Suffix,
    /// Re-check each owner with a literal substring test before returning it
    Verified,
}

impl SearchMode {
    pub fn from_verify_flag(verify: bool) -> Self {
        if verify {
            SearchMode::Verified
        } else {
            SearchMode::Suffix
        }
    }
}

/// Counters collected while building a [`SuffixIndex`](super::SuffixIndex)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of input strings handed to the builder
    pub input_count: usize,
    /// Number of distinct words kept in the word table
    pub word_count: usize,
    /// Inputs dropped because an equal word was already present
    pub duplicate_count: usize,
    /// Distinct empty words (reachable only through the empty pattern)
    pub empty_count: usize,
    /// Number of suffixes inserted into the trie
    pub suffix_count: u64,
    /// Total symbols walked while inserting suffixes
    pub symbol_count: u64,
    /// Trie nodes, root included
    pub node_count: u64,
    /// Length in symbols of the longest word (trie depth)
    pub max_depth: usize,
}

impl IndexStats {
    /// Average number of inserted symbols that landed on each non-root node.
    ///
    /// A ratio of 1.0 means no two suffixes shared a trie path.
    pub fn sharing_ratio(&self) -> f64 {
        if self.node_count <= 1 {
            return 0.0;
        }
        self.symbol_count as f64 / (self.node_count - 1) as f64
    }
}
