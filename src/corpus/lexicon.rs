//! Display forms and definitions attached to corpus keys

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One dictionary record for a key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Form shown to the user in suggestion lists
    pub display: String,
    pub definition: String,
}

/// Entries grouped by the key they were indexed under.
///
/// Entries of a key keep the order in which their records were loaded.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, Vec<Entry>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) {
        self.entries.entry(key.into()).or_default().push(entry);
    }

    /// Entries recorded for `key`; empty when the key is unknown
    pub fn definitions(&self, key: &str) -> &[Entry] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Display forms of `key` joined with ", ".
    ///
    /// Falls back to the key itself when it has no non-empty display form.
    pub fn display(&self, key: &str) -> String {
        let forms: Vec<&str> = self
            .definitions(key)
            .iter()
            .map(|entry| entry.display.as_str())
            .filter(|display| !display.is_empty())
            .collect();

        if forms.is_empty() {
            key.to_string()
        } else {
            forms.join(", ")
        }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
