//! Index versus brute-force comparison
//!
//! Used by `lexfind bench` to time both strategies on the same corpus and
//! to check that they agree. Agreement is the core correctness property of
//! the index: for every pattern the sorted result sets must be identical.

use super::scan::brute_force;
use crate::index::{SearchMode, SuffixIndex};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Probe that should miss on ordinary text
const ABSENT_PROBE: &str = "\u{0}\u{0}";

/// Timing and agreement of one pattern
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub pattern: String,
    pub scan_time: Duration,
    pub index_time: Duration,
    pub scan_matches: usize,
    pub index_matches: usize,
    /// Whether both strategies returned the same sorted words
    pub equal: bool,
}

impl Comparison {
    /// Run the brute-force scan and the indexed query for `pattern`
    pub fn run<S>(index: &SuffixIndex, words: &[S], pattern: &str, mode: SearchMode) -> Self
    where
        S: AsRef<str>,
    {
        let start = Instant::now();
        let scanned = brute_force(words, pattern);
        let scan_time = start.elapsed();

        let start = Instant::now();
        let indexed = index.search_with_mode(pattern, mode);
        let index_time = start.elapsed();

        Self {
            pattern: pattern.to_string(),
            scan_time,
            index_time,
            scan_matches: scanned.len(),
            index_matches: indexed.len(),
            equal: scanned == indexed,
        }
    }

    /// How many times faster the index answered than the scan
    pub fn speedup(&self) -> f64 {
        let index_secs = self.index_time.as_secs_f64();
        if index_secs == 0.0 {
            return f64::INFINITY;
        }
        self.scan_time.as_secs_f64() / index_secs
    }
}

/// Patterns whose indexed result differs from the brute-force scan.
///
/// Patterns are checked in parallel against the shared index.
pub fn verify_patterns<'p, S>(
    index: &SuffixIndex,
    words: &[S],
    patterns: &'p [String],
    mode: SearchMode,
) -> Vec<&'p str>
where
    S: AsRef<str> + Sync,
{
    let mut mismatches: Vec<&str> = patterns
        .par_iter()
        .filter(|pattern| index.search_with_mode(pattern, mode) != brute_force(words, pattern))
        .map(String::as_str)
        .collect();
    mismatches.sort_unstable();
    mismatches
}

/// Deterministic set of patterns drawn from `words`.
///
/// Collects every substring of at most `max_len` symbols, then keeps an
/// evenly spaced selection of at most `limit` of them. The empty pattern
/// and a probe that should miss are always included.
pub fn sample_patterns<S>(words: &[S], max_len: usize, limit: usize) -> Vec<String>
where
    S: AsRef<str>,
{
    let mut substrings: BTreeSet<String> = BTreeSet::new();

    for word in words {
        let symbols: Vec<char> = word.as_ref().chars().collect();
        for start in 0..symbols.len() {
            let end_max = start.saturating_add(max_len).min(symbols.len());
            for end in start + 1..=end_max {
                substrings.insert(symbols[start..end].iter().collect());
            }
        }
    }

    let step = (substrings.len() / limit.max(1)).max(1);
    let mut patterns: Vec<String> = substrings.into_iter().step_by(step).take(limit).collect();

    patterns.push(String::new());
    patterns.push(ABSENT_PROBE.to_string());
    patterns
}
