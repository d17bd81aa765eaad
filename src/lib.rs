//! # lexfind - Dictionary lookup over a generalized suffix trie
//!
//! lexfind loads a word list (optionally with display forms and
//! definitions), inserts every suffix of every word into one shared trie,
//! and answers "which words contain this substring" by walking the trie
//! once per query instead of scanning the whole list.
//!
//! ## Architecture
//!
//! - [`index`] - Suffix trie construction and queries
//! - [`corpus`] - Word file loading and dictionary entries
//! - [`query`] - Brute-force reference scan, suggestion ranking, benchmarks
//! - [`repl`] - Interactive lookup loop
//! - [`output`] - Terminal rendering
//! - [`utils`] - Configuration, logging and progress bars
//!
//! ## Quick Start
//!
//! ```
//! use lexfind::index::SuffixIndex;
//!
//! let index = SuffixIndex::new(["cat", "cats", "scatter"]);
//!
//! assert_eq!(index.search("cat"), vec!["cat", "cats", "scatter"]);
//! assert_eq!(index.search("ts"), vec!["cats"]);
//! assert!(index.search("z").is_empty());
//! ```
//!
//! ## Cost
//!
//! The trie is not compressed: a word of `n` symbols contributes `n`
//! suffixes and O(n²) nodes. Queries cost O(pattern length) to locate the
//! matching node plus the size of the result.

pub mod corpus;
pub mod index;
pub mod output;
pub mod query;
pub mod repl;
pub mod utils;
