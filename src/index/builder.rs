//! Suffix index builder
//!
//! Builds a generalized suffix trie from a collection of words by:
//! 1. Sorting and deduplicating the words into a word table
//! 2. Inserting every non-empty suffix of every word, marking the word as
//!    an owner of each node the suffix passes through
//!
//! The trie is uncompressed, so a word of `n` symbols costs O(n²) symbol
//! insertions.

use super::node::TrieNode;
use super::suffix_index::SuffixIndex;
use super::types::{IndexStats, Symbol, WordId};
use crate::utils::progress::ProgressBar;
use tracing::debug;

/// Words are reported to the progress bar in batches of this size
const PROGRESS_BATCH: usize = 1024;

/// Builder for constructing a [`SuffixIndex`] from words
#[derive(Debug, Default)]
pub struct SuffixIndexBuilder {
    /// Words in insertion order, duplicates included
    words: Vec<String>,
}

impl SuffixIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Queue a single word for indexing
    pub fn add_word(&mut self, word: impl Into<String>) -> &mut Self {
        self.words.push(word.into());
        self
    }

    /// Queue every word of `words` for indexing
    pub fn add_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Number of words queued so far, duplicates included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build the index from the queued words
    pub fn build(self) -> SuffixIndex {
        self.build_inner(None)
    }

    /// Build the index, advancing `progress` by one per distinct word
    pub fn build_with_progress(self, progress: &ProgressBar) -> SuffixIndex {
        self.build_inner(Some(progress))
    }

    fn build_inner(self, progress: Option<&ProgressBar>) -> SuffixIndex {
        let input_count = self.words.len();

        let mut words = self.words;
        words.sort_unstable();
        words.dedup();

        debug_assert!(words.len() <= WordId::MAX as usize + 1);

        if let Some(progress) = progress {
            progress.set_length(words.len() as u64);
        }

        let mut stats = IndexStats {
            input_count,
            word_count: words.len(),
            duplicate_count: input_count - words.len(),
            node_count: 1,
            ..Default::default()
        };

        let mut root = TrieNode::new();
        let mut symbols: Vec<Symbol> = Vec::new();

        for (index, word) in words.iter().enumerate() {
            let id = index as WordId;

            // The empty pattern walks zero edges, so the root owns everything
            root.add_owner(id);

            symbols.clear();
            symbols.extend(word.chars());

            if symbols.is_empty() {
                stats.empty_count += 1;
            }
            stats.max_depth = stats.max_depth.max(symbols.len());

            let n = symbols.len();
            for suffix_length in 0..n {
                let suffix = &symbols[n - suffix_length - 1..];
                insert_suffix(&mut root, suffix, id, &mut stats);
            }

            if let Some(progress) = progress {
                if (index + 1) % PROGRESS_BATCH == 0 {
                    progress.inc(PROGRESS_BATCH as u64);
                }
            }
        }

        if let Some(progress) = progress {
            progress.inc((words.len() % PROGRESS_BATCH) as u64);
        }

        debug!(
            words = stats.word_count,
            duplicates = stats.duplicate_count,
            suffixes = stats.suffix_count,
            nodes = stats.node_count,
            "suffix trie built"
        );

        SuffixIndex::from_parts(words, root, stats)
    }
}

/// Insert one suffix, adding `owner` to every node below the root it visits
fn insert_suffix(root: &mut TrieNode, suffix: &[Symbol], owner: WordId, stats: &mut IndexStats) {
    let mut node = root;
    for &symbol in suffix {
        let (child, created) = node.child_or_insert(symbol);
        if created {
            stats.node_count += 1;
        }
        child.add_owner(owner);
        node = child;
    }

    stats.suffix_count += 1;
    stats.symbol_count += suffix.len() as u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty() {
        let index = SuffixIndexBuilder::new().build();

        assert!(index.is_empty());
        assert_eq!(index.stats().node_count, 1);
        assert!(index.root().is_leaf());
        assert!(index.root().owners().is_empty());
    }

    #[test]
    fn test_build_counts_suffixes() {
        let mut builder = SuffixIndexBuilder::new();
        builder.add_word("banana");
        let index = builder.build();
        let stats = index.stats();

        assert_eq!(stats.word_count, 1);
        assert_eq!(stats.suffix_count, 6);
        // 6 + 5 + 4 + 3 + 2 + 1
        assert_eq!(stats.symbol_count, 21);
        assert_eq!(stats.max_depth, 6);
        // Distinct substrings of "banana" (15) plus the root
        assert_eq!(stats.node_count, 16);
        assert_eq!(index.root().subtree_size() as u64, stats.node_count);
    }

    #[test]
    fn test_build_dedups_by_value() {
        let mut builder = SuffixIndexBuilder::new();
        builder.add_words(["ab", "ab", "b"]);
        assert_eq!(builder.len(), 3);

        let index = builder.build();
        let stats = index.stats();

        assert_eq!(stats.input_count, 3);
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.duplicate_count, 1);
        assert_eq!(index.words(), ["ab", "b"]);
    }

    #[test]
    fn test_owner_added_along_whole_path() {
        let index = SuffixIndex::new(["abc"]);
        let root = index.root();

        // Every prefix of every suffix is a node owned by the word
        for pattern in ["a", "ab", "abc", "b", "bc", "c"] {
            let node = root.walk(pattern.chars()).unwrap();
            assert!(node.owners().contains(0), "missing owner at {pattern:?}");
        }
    }

    #[test]
    fn test_parent_owners_cover_children() {
        let index = SuffixIndex::new(["cat", "cats", "scatter", "tact"]);

        let mut stack = vec![index.root()];
        while let Some(node) = stack.pop() {
            for (_, child) in node.children() {
                assert!(child.owners().is_subset(node.owners()));
                stack.push(child);
            }
        }
    }

    #[test]
    fn test_empty_word_owned_by_root_only() {
        let index = SuffixIndex::new(["", "a"]);
        let stats = index.stats();

        assert_eq!(stats.empty_count, 1);
        assert_eq!(stats.suffix_count, 1);
        assert_eq!(index.root().owners().len(), 2);
        assert_eq!(index.root().child('a').unwrap().owners().len(), 1);
    }

    #[test]
    fn test_multibyte_symbols() {
        let index = SuffixIndex::new(["שלום"]);
        let stats = index.stats();

        assert_eq!(stats.max_depth, 4);
        assert_eq!(stats.suffix_count, 4);
        assert!(index.root().child('ם').is_some());
    }

    #[test]
    fn test_build_with_progress() {
        let words: Vec<String> = (0..3000).map(|i| format!("w{i}")).collect();
        let progress = ProgressBar::new(words.len() as u64);

        let mut builder = SuffixIndexBuilder::with_capacity(words.len());
        builder.add_words(words);
        let index = builder.build_with_progress(&progress);

        assert_eq!(index.len(), 3000);
    }

    #[cfg(feature = "progress")]
    #[test]
    fn test_progress_counts_distinct_words() {
        let progress = ProgressBar::hidden();

        let mut builder = SuffixIndexBuilder::new();
        builder.add_words(["run", "ring", "run", "ring", "run"]);
        builder.build_with_progress(&progress);

        assert_eq!(progress.length(), Some(2));
        assert_eq!(progress.position(), 2);
    }
}
