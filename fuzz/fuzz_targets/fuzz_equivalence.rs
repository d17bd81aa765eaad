#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexfind::index::SuffixIndex;
use lexfind::query::brute_force;

#[derive(Debug, Arbitrary)]
struct Input {
    words: Vec<String>,
    patterns: Vec<String>,
}

fuzz_target!(|input: Input| {
    // Keep the quadratic build bounded
    let words: Vec<String> = input
        .words
        .into_iter()
        .take(64)
        .map(|w| w.chars().take(32).collect())
        .collect();

    let index = SuffixIndex::new(words.iter().cloned());
    for pattern in input.patterns.iter().take(16) {
        assert_eq!(index.search(pattern), brute_force(&words, pattern));
        assert_eq!(index.search_verified(pattern), brute_force(&words, pattern));
    }
});
