//! Corpus loading from word files
//!
//! Three input shapes are accepted:
//! - a JSON array of records, each record an array of string fields
//! - a JSON array of plain strings
//! - a text file (`.txt`) with one word per line
//!
//! For records, the key field is what gets indexed; the display and
//! definition fields feed the [`Lexicon`].

use super::lexicon::{Entry, Lexicon};
use crate::index::SuffixIndex;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Positions of the interesting fields inside a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field holding the string to index (required)
    pub key: usize,
    /// Field holding the form shown in suggestion lists
    pub display: usize,
    /// Field holding the definition text
    pub definition: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            key: 3,
            display: 1,
            definition: 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCorpus {
    Words(Vec<String>),
    Records(Vec<Vec<String>>),
}

/// Words to index plus their dictionary entries
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Keys in file order, duplicates included
    pub words: Vec<String>,
    pub lexicon: Lexicon,
}

impl Corpus {
    /// Corpus of bare words with no dictionary entries
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            lexicon: Lexicon::new(),
        }
    }

    /// Build a corpus from structured records.
    ///
    /// Fails on the first record that lacks the key field. Missing display
    /// or definition fields are recorded as empty strings.
    pub fn from_records(records: &[Vec<String>], layout: FieldLayout) -> Result<Self> {
        let mut words = Vec::with_capacity(records.len());
        let mut lexicon = Lexicon::new();

        for (i, record) in records.iter().enumerate() {
            let Some(key) = record.get(layout.key) else {
                bail!(
                    "record {} has {} field(s), key field {} is missing",
                    i,
                    record.len(),
                    layout.key
                );
            };

            let field = |idx: usize| record.get(idx).cloned().unwrap_or_default();
            lexicon.insert(
                key.clone(),
                Entry {
                    display: field(layout.display),
                    definition: field(layout.definition),
                },
            );
            words.push(key.clone());
        }

        Ok(Self { words, lexicon })
    }

    /// Parse a JSON document holding either records or plain words
    pub fn from_json(bytes: &[u8], layout: FieldLayout) -> Result<Self> {
        let raw: RawCorpus = serde_json::from_slice(bytes)
            .context("Expected a JSON array of strings or of string arrays")?;

        match raw {
            RawCorpus::Words(words) => Ok(Self::from_words(words)),
            RawCorpus::Records(records) => Self::from_records(&records, layout),
        }
    }

    /// One word per line; surrounding whitespace is trimmed and blank lines skipped
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Load a corpus file, choosing the format from its extension
    pub fn load(path: &Path, layout: FieldLayout) -> Result<Self> {
        info!(path = %path.display(), "loading corpus");

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read word file {}", path.display()))?;

        let is_text = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

        let corpus = if is_text {
            let text = String::from_utf8(bytes)
                .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
            Self::from_lines(&text)
        } else {
            Self::from_json(&bytes, layout)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        };

        debug!(
            words = corpus.words.len(),
            keys = corpus.lexicon.len(),
            "corpus loaded"
        );

        Ok(corpus)
    }

    pub fn build_index(&self) -> SuffixIndex {
        SuffixIndex::new(self.words.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_from_records_default_layout() {
        let records = vec![
            record(&["a small feline", "Cat", "n", "cat"]),
            record(&["more than one cat", "Cats", "n", "cats"]),
        ];
        let corpus = Corpus::from_records(&records, FieldLayout::default()).unwrap();

        assert_eq!(corpus.words, vec!["cat", "cats"]);
        assert_eq!(corpus.lexicon.display("cat"), "Cat");
        assert_eq!(
            corpus.lexicon.definitions("cats")[0].definition,
            "more than one cat"
        );
    }

    #[test]
    fn test_from_records_missing_key() {
        let records = vec![
            record(&["def", "disp", "n", "ok"]),
            record(&["def", "disp"]),
        ];
        let err = Corpus::from_records(&records, FieldLayout::default()).unwrap_err();

        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_from_records_missing_optional_fields() {
        let layout = FieldLayout {
            key: 0,
            display: 5,
            definition: 6,
        };
        let corpus = Corpus::from_records(&[record(&["solo"])], layout).unwrap();

        assert_eq!(corpus.lexicon.definitions("solo")[0], Entry::default());
        assert_eq!(corpus.lexicon.display("solo"), "solo");
    }

    #[test]
    fn test_from_json_words() {
        let json = br#"["cat", "cats", "scatter"]"#;
        let corpus = Corpus::from_json(json, FieldLayout::default()).unwrap();

        assert_eq!(corpus.words, vec!["cat", "cats", "scatter"]);
        assert!(corpus.lexicon.is_empty());
    }

    #[test]
    fn test_from_json_records() {
        let json = br#"[["to run", "Run", "v", "run"], ["a run", "Run", "n", "run"]]"#;
        let corpus = Corpus::from_json(json, FieldLayout::default()).unwrap();

        assert_eq!(corpus.words, vec!["run", "run"]);
        assert_eq!(corpus.lexicon.definitions("run").len(), 2);
        assert_eq!(corpus.build_index().len(), 1);
    }

    #[test]
    fn test_from_json_empty_array() {
        let corpus = Corpus::from_json(b"[]", FieldLayout::default()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_from_json_rejects_objects() {
        let layout = FieldLayout::default();
        assert!(Corpus::from_json(br#"{"words": []}"#, layout).is_err());
        assert!(Corpus::from_json(b"not json", layout).is_err());
    }

    #[test]
    fn test_from_lines() {
        let corpus = Corpus::from_lines("alpha\n\n  beta  \r\ngamma\n");
        assert_eq!(corpus.words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_load_txt_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("words.txt");
        fs::write(&txt, "one\ntwo\n").unwrap();
        let corpus = Corpus::load(&txt, FieldLayout::default()).unwrap();
        assert_eq!(corpus.len(), 2);

        let json = dir.path().join("words.json");
        let mut file = fs::File::create(&json).unwrap();
        file.write_all(br#"["three"]"#).unwrap();
        let corpus = Corpus::load(&json, FieldLayout::default()).unwrap();
        assert_eq!(corpus.words, vec!["three"]);
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("/nonexistent/words.json");
        let err = Corpus::load(path, FieldLayout::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read word file"));
    }
}
