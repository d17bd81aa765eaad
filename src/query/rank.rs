//! Ranking of completion suggestions
//!
//! Suggestions are ordered by:
//! 1. Key length in symbols (shorter first)
//! 2. Smallest edit distance between the pattern and any whitespace
//!    separated word of the key
//! 3. The key itself, so ties stay deterministic

use crate::corpus::Lexicon;
use crate::index::{SearchMode, SuffixIndex};
use serde::Serialize;

/// Default number of index matches considered for suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 100;

/// A matched key and how it should be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub key: String,
    pub display: String,
}

/// Rank the keys matching `pattern`.
///
/// Only the first `limit` matches in lexicographic order are considered,
/// then those are reordered by relevance.
pub fn suggest(
    index: &SuffixIndex,
    lexicon: &Lexicon,
    pattern: &str,
    mode: SearchMode,
    limit: usize,
) -> Vec<Suggestion> {
    let mut ranked: Vec<(usize, usize, Suggestion)> = index
        .search_with_mode(pattern, mode)
        .into_iter()
        .take(limit)
        .map(|key| {
            let suggestion = Suggestion {
                key: key.to_string(),
                display: lexicon.display(key),
            };
            let distance = closest_distance(pattern, key);
            (key.chars().count(), distance, suggestion)
        })
        .collect();

    ranked.sort_by(|a, b| (a.0, a.1, &a.2.key).cmp(&(b.0, b.1, &b.2.key)));
    ranked.into_iter().map(|(_, _, suggestion)| suggestion).collect()
}

/// Minimum Levenshtein distance between `pattern` and any word of `key`.
///
/// A key with no words (empty or all whitespace) is compared as a whole.
pub fn closest_distance(pattern: &str, key: &str) -> usize {
    key.split_whitespace()
        .map(|word| strsim::levenshtein(pattern, word))
        .min()
        .unwrap_or_else(|| strsim::levenshtein(pattern, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Entry;

    fn keys(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_closest_distance_multiword() {
        assert_eq!(closest_distance("cat", "black cat"), 0);
        assert_eq!(closest_distance("cat", "cats"), 1);
        assert_eq!(closest_distance("cat", ""), 3);
        assert_eq!(closest_distance("", "  "), 2);
    }

    #[test]
    fn test_suggest_orders_by_length_then_distance() {
        let index = SuffixIndex::new(["scatter", "cats", "cat", "tacat", "acts"]);
        let lexicon = Lexicon::new();

        let suggestions = suggest(&index, &lexicon, "cat", SearchMode::Suffix, 100);
        assert_eq!(keys(&suggestions), vec!["cat", "cats", "tacat", "scatter"]);
    }

    #[test]
    fn test_suggest_distance_breaks_length_ties() {
        let index = SuffixIndex::new(["xcat", "cats"]);
        let lexicon = Lexicon::new();

        // both have length 4 and distance 1; key order decides
        let suggestions = suggest(&index, &lexicon, "cat", SearchMode::Suffix, 100);
        assert_eq!(keys(&suggestions), vec!["cats", "xcat"]);

        let index = SuffixIndex::new(["a cat", "catty"]);
        let suggestions = suggest(&index, &lexicon, "cat", SearchMode::Suffix, 100);
        assert_eq!(keys(&suggestions), vec!["a cat", "catty"]);
    }

    #[test]
    fn test_suggest_uses_lexicon_display() {
        let index = SuffixIndex::new(["colour"]);
        let mut lexicon = Lexicon::new();
        lexicon.insert(
            "colour",
            Entry {
                display: "Colour".to_string(),
                definition: "hue".to_string(),
            },
        );

        let suggestions = suggest(&index, &lexicon, "lou", SearchMode::Verified, 100);
        assert_eq!(
            suggestions,
            vec![Suggestion {
                key: "colour".to_string(),
                display: "Colour".to_string(),
            }]
        );
    }

    #[test]
    fn test_suggest_limit_applies_before_ranking() {
        let index = SuffixIndex::new(["aaaa", "aab", "ab"]);
        let lexicon = Lexicon::new();

        // lexicographic first two are "aaaa" and "aab"; "ab" is cut off
        let suggestions = suggest(&index, &lexicon, "a", SearchMode::Suffix, 2);
        assert_eq!(keys(&suggestions), vec!["aab", "aaaa"]);
    }

    #[test]
    fn test_suggest_no_match() {
        let index = SuffixIndex::new(["cat"]);
        let suggestions = suggest(&index, &Lexicon::new(), "dog", SearchMode::Suffix, 100);
        assert!(suggestions.is_empty());
    }
}
