//! Read side of the generalized suffix trie

use super::builder::SuffixIndexBuilder;
use super::node::TrieNode;
use super::types::{IndexStats, SearchMode, WordId};
use roaring::RoaringBitmap;

/// Generalized suffix trie over a corpus of words.
///
/// Immutable once built; every query takes `&self`, so one index can serve
/// many threads at once.
#[derive(Debug)]
pub struct SuffixIndex {
    /// Distinct words sorted lexicographically, indexed by [`WordId`]
    words: Vec<String>,
    root: TrieNode,
    stats: IndexStats,
}

impl SuffixIndex {
    /// Build an index over `words`
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = SuffixIndexBuilder::new();
        builder.add_words(words);
        builder.build()
    }

    pub(crate) fn from_parts(words: Vec<String>, root: TrieNode, stats: IndexStats) -> Self {
        Self { words, root, stats }
    }

    /// Words containing `pattern`, sorted and deduplicated.
    ///
    /// The empty pattern matches every word. A pattern that is not a
    /// substring of any word yields an empty vector.
    pub fn search(&self, pattern: &str) -> Vec<&str> {
        self.search_with_mode(pattern, SearchMode::Suffix)
    }

    /// Like [`search`](Self::search), but re-checks each candidate with
    /// `str::contains` before returning it
    pub fn search_verified(&self, pattern: &str) -> Vec<&str> {
        self.search_with_mode(pattern, SearchMode::Verified)
    }

    pub fn search_with_mode(&self, pattern: &str, mode: SearchMode) -> Vec<&str> {
        let Some(owners) = self.search_ids(pattern) else {
            return Vec::new();
        };

        let candidates = owners.iter().filter_map(|id| self.word(id));
        match mode {
            SearchMode::Suffix => candidates.collect(),
            SearchMode::Verified => candidates.filter(|word| word.contains(pattern)).collect(),
        }
    }

    /// Owners of the node reached by walking `pattern`, or `None` when the
    /// walk falls off the trie
    pub fn search_ids(&self, pattern: &str) -> Option<&RoaringBitmap> {
        self.root.walk(pattern.chars()).map(TrieNode::owners)
    }

    /// Number of words containing `pattern`
    pub fn count(&self, pattern: &str) -> u64 {
        self.search_ids(pattern).map_or(0, RoaringBitmap::len)
    }

    /// Whether `pattern` occurs in at least one word
    pub fn contains_substring(&self, pattern: &str) -> bool {
        self.search_ids(pattern)
            .is_some_and(|owners| !owners.is_empty())
    }

    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    /// Distinct corpus words in lexicographic order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}
