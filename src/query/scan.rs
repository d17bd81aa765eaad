//! Brute-force substring scan, the reference the index is measured against

/// Distinct words containing `pattern`, sorted lexicographically.
///
/// Checks every word with `str::contains`; O(total corpus length) per call.
pub fn brute_force<'a, S>(words: &'a [S], pattern: &str) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    let mut matches: Vec<&str> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| word.contains(pattern))
        .collect();
    matches.sort_unstable();
    matches.dedup();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_sorted_and_distinct() {
        let words = ["scatter", "cat", "cats", "cat"];
        assert_eq!(brute_force(&words, "cat"), vec!["cat", "cats", "scatter"]);
    }

    #[test]
    fn test_brute_force_empty_pattern() {
        let words = vec!["b".to_string(), "a".to_string(), String::new()];
        assert_eq!(brute_force(&words, ""), vec!["", "a", "b"]);
    }

    #[test]
    fn test_brute_force_no_match() {
        let words = ["cat"];
        assert!(brute_force(&words, "dog").is_empty());
    }
}
