//! Corpus loading and dictionary entries
//!
//! - [`loader`] - Reads word files and selects the indexed field
//! - [`lexicon`] - Display forms and definitions per key

pub mod lexicon;
pub mod loader;

pub use lexicon::{Entry, Lexicon};
pub use loader::{Corpus, FieldLayout};
