//! Per-window session state
//!
//! Owns the mutable pieces of one UI session: the current card index, the
//! user's text buffer and its last annotated output. The catalog itself is
//! read-only here; every update function takes it by reference and the
//! annotated output is recomputed from the raw buffer on each mutation.

use serde::Serialize;

use crate::catalog::{Catalog, PhraseEntry};
use crate::highlight::{annotate, apply_replacement, AnnotatedText};

/// The card the front end should show: its catalog index plus the entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub index: usize,
    pub entry: PhraseEntry,
}

#[derive(Debug, Default)]
pub struct Session {
    index: usize,
    buffer: String,
    annotated: AnnotatedText,
}

impl Session {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// The card at the current index, or `None` while the catalog is empty.
    pub fn current_card(&self, catalog: &Catalog) -> Option<CardView> {
        catalog.get(self.index).map(|entry| CardView {
            index: self.index,
            entry: entry.clone(),
        })
    }

    /// Advance to the next card, wrapping at the end of the catalog.
    pub fn next_card(&mut self, catalog: &Catalog) -> Option<CardView> {
        if catalog.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % catalog.len();
        self.current_card(catalog)
    }

    /// Step back to the previous card, wrapping from 0 to the last entry.
    pub fn prev_card(&mut self, catalog: &Catalog) -> Option<CardView> {
        if catalog.is_empty() {
            return None;
        }
        self.index = (self.index + catalog.len() - 1) % catalog.len();
        self.current_card(catalog)
    }

    /// Replace the text buffer and re-run the highlight pass.
    pub fn set_text(&mut self, text: String, catalog: &Catalog) -> AnnotatedText {
        self.buffer = text;
        self.annotated = annotate(&self.buffer, catalog);
        self.annotated.clone()
    }

    /// Apply one marker substitution to the buffer and re-annotate.
    pub fn apply_replacement(
        &mut self,
        surface: &str,
        replacement: &str,
        catalog: &Catalog,
    ) -> AnnotatedText {
        self.buffer = apply_replacement(&self.buffer, surface, replacement);
        self.annotated = annotate(&self.buffer, catalog);
        self.annotated.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| PhraseEntry::new(format!("phrase{}", i), format!("simple{}", i)))
                .collect(),
        )
    }

    #[test]
    fn test_next_wraps_around() {
        let cat = catalog(3);
        let mut session = Session::default();
        for _ in 0..3 {
            session.next_card(&cat);
        }
        assert_eq!(session.current_card(&cat).unwrap().index, 0);
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let cat = catalog(3);
        let mut session = Session::default();
        let card = session.prev_card(&cat).unwrap();
        assert_eq!(card.index, 2);
    }

    #[test]
    fn test_navigation_on_empty_catalog() {
        let cat = Catalog::default();
        let mut session = Session::default();
        assert!(session.current_card(&cat).is_none());
        assert!(session.next_card(&cat).is_none());
        assert!(session.prev_card(&cat).is_none());
    }

    #[test]
    fn test_set_text_annotates_buffer() {
        let cat = Catalog::new(vec![PhraseEntry::new("utilize", "use")]);
        let mut session = Session::default();
        let out = session.set_text("Please utilize this.".to_string(), &cat);
        assert_eq!(out.spans.len(), 1);
        assert_eq!(session.text(), "Please utilize this.");
    }

    #[test]
    fn test_apply_replacement_mutates_buffer_and_reannotates() {
        let cat = Catalog::new(vec![PhraseEntry::new("utilize", "use")]);
        let mut session = Session::default();
        session.set_text("Please utilize this.".to_string(), &cat);
        let out = session.apply_replacement("utilize", "use", &cat);
        assert_eq!(session.text(), "Please use this.");
        assert!(out.spans.is_empty());
        assert_eq!(out.html, "Please use this.");
    }
}
