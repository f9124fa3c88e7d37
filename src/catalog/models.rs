//! Data models for the phrase catalog

use serde::{Deserialize, Serialize};

/// One "complex phrase → simpler replacement" pair.
///
/// `phrase` may encode several interchangeable surface forms separated by
/// commas, with optional parenthetical annotations that are stripped before
/// matching (e.g. "utilize (formal), make use of").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseEntry {
    pub phrase: String,
    pub replacement: String,
}

impl PhraseEntry {
    pub fn new(phrase: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            replacement: replacement.into(),
        }
    }
}

/// Ordered collection of phrase entries, insertion order = source row order.
///
/// Written once at load time and immutable for the rest of the session.
/// Duplicate phrases are allowed and behave independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    entries: Vec<PhraseEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<PhraseEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PhraseEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
