//! Span computation, rendering and substitution
//!
//! Annotation is a pure function of (raw text, catalog): matches are
//! collected as non-overlapping spans first, then rendered once. The raw
//! buffer is always the input, never the rendered markup, so markers can
//! never be wrapped inside other markers.

use serde::Serialize;

use crate::catalog::Catalog;

use super::variants::{variant_set, word_matcher};

/// A matched region of the text, carrying the surface string as it appears
/// in the buffer and the replacement to substitute on click. Recomputed on
/// every text change, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    /// Byte offset of the match start in the raw text.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched text with its original casing.
    pub surface: String,
    /// The catalog entry's replacement value.
    pub replacement: String,
}

/// The product of one highlight pass: rendered HTML plus the span list it
/// was rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedText {
    pub html: String,
    pub spans: Vec<HighlightSpan>,
}

/// Annotate `text` with a marker over every occurrence of a catalog phrase
/// variant.
///
/// Candidates are collected in catalog order, variant order, left to right;
/// a candidate overlapping an already accepted span is rejected, so the
/// first entry in catalog order wins on overlap. Malformed variants are
/// skipped. An empty text runs no pass at all.
pub fn annotate(text: &str, catalog: &Catalog) -> AnnotatedText {
    if text.is_empty() {
        return AnnotatedText::default();
    }

    let mut spans: Vec<HighlightSpan> = Vec::new();
    for entry in catalog.entries() {
        for variant in variant_set(&entry.phrase) {
            let Some(matcher) = word_matcher(&variant) else {
                continue;
            };
            for m in matcher.find_iter(text) {
                let occupied = spans
                    .iter()
                    .any(|s| m.start() < s.end && s.start < m.end());
                if occupied {
                    continue;
                }
                spans.push(HighlightSpan {
                    start: m.start(),
                    end: m.end(),
                    surface: m.as_str().to_string(),
                    replacement: entry.replacement.clone(),
                });
            }
        }
    }

    spans.sort_unstable_by_key(|s| s.start);

    AnnotatedText {
        html: render(text, &spans),
        spans,
    }
}

/// Render the annotated HTML from the accepted spans, sorted by start.
///
/// Unmatched text is HTML-escaped; each span becomes a `<mark>` element
/// whose visible content is the original surface text and whose
/// `data-replacement` attribute carries the substitution value.
fn render(text: &str, spans: &[HighlightSpan]) -> String {
    let mut html = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        html.push_str(&html_escape::encode_text(&text[cursor..span.start]));
        html.push_str("<mark class=\"phrase-hit\" data-replacement=\"");
        html.push_str(&html_escape::encode_double_quoted_attribute(
            &span.replacement,
        ));
        html.push_str("\">");
        html.push_str(&html_escape::encode_text(&span.surface));
        html.push_str("</mark>");
        cursor = span.end;
    }
    html.push_str(&html_escape::encode_text(&text[cursor..]));
    html
}

/// Substitute the first occurrence of `surface` in `buffer` with
/// `replacement`, by direct substring search rather than regex.
///
/// When the same surface string appears more than once the earliest
/// occurrence is replaced, which may not be the one that was clicked; that
/// ambiguity is an accepted limitation. A surface with no occurrence
/// leaves the buffer unchanged.
pub fn apply_replacement(buffer: &str, surface: &str, replacement: &str) -> String {
    if surface.is_empty() {
        return buffer.to_string();
    }
    buffer.replacen(surface, replacement, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PhraseEntry;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        Catalog::new(
            pairs
                .iter()
                .map(|(p, r)| PhraseEntry::new(*p, *r))
                .collect(),
        )
    }

    #[test]
    fn test_annotate_no_match_is_identity() {
        let cat = catalog(&[("utilize", "use")]);
        let out = annotate("nothing to see here", &cat);
        assert!(out.spans.is_empty());
        assert_eq!(out.html, "nothing to see here");
    }

    #[test]
    fn test_annotate_empty_text() {
        let cat = catalog(&[("utilize", "use")]);
        let out = annotate("", &cat);
        assert_eq!(out, AnnotatedText::default());
    }

    #[test]
    fn test_annotate_empty_catalog() {
        let out = annotate("We utilize this.", &Catalog::default());
        assert!(out.spans.is_empty());
        assert_eq!(out.html, "We utilize this.");
    }

    #[test]
    fn test_annotate_wraps_match_with_replacement() {
        let cat = catalog(&[("utilize", "use")]);
        let out = annotate("Please utilize this.", &cat);
        assert_eq!(out.spans.len(), 1);
        assert_eq!(out.spans[0].surface, "utilize");
        assert_eq!(out.spans[0].replacement, "use");
        assert_eq!(
            out.html,
            "Please <mark class=\"phrase-hit\" data-replacement=\"use\">utilize</mark> this."
        );
    }

    #[test]
    fn test_annotate_preserves_original_casing() {
        let cat = catalog(&[("utilize", "use")]);
        let out = annotate("UTILIZE it", &cat);
        assert_eq!(out.spans[0].surface, "UTILIZE");
        assert!(out.html.contains(">UTILIZE</mark>"));
    }

    #[test]
    fn test_annotate_enforces_word_boundary() {
        let cat = catalog(&[("utilize", "use")]);
        let out = annotate("They utilized it.", &cat);
        assert!(out.spans.is_empty());
        assert_eq!(out.html, "They utilized it.");
    }

    #[test]
    fn test_annotate_two_entries() {
        let cat = catalog(&[("utilize", "use"), ("in order to", "to")]);
        let out = annotate("We utilize this in order to succeed.", &cat);
        assert_eq!(out.spans.len(), 2);
        assert_eq!(out.spans[0].surface, "utilize");
        assert_eq!(out.spans[0].replacement, "use");
        assert_eq!(out.spans[1].surface, "in order to");
        assert_eq!(out.spans[1].replacement, "to");
    }

    #[test]
    fn test_annotate_comma_variants_share_replacement() {
        let cat = catalog(&[("utilize (formal), make use of", "use")]);
        let out = annotate("We utilize and make use of this.", &cat);
        assert_eq!(out.spans.len(), 2);
        assert!(out.spans.iter().all(|s| s.replacement == "use"));
    }

    #[test]
    fn test_annotate_first_catalog_order_wins_on_overlap() {
        let cat = catalog(&[("order to", "so"), ("in order to", "to")]);
        let out = annotate("We act in order to win.", &cat);
        assert_eq!(out.spans.len(), 1);
        assert_eq!(out.spans[0].surface, "order to");
        assert_eq!(out.spans[0].replacement, "so");
    }

    #[test]
    fn test_annotate_escapes_markup_in_text() {
        let cat = catalog(&[("utilize", "use")]);
        let out = annotate("a < b & utilize", &cat);
        assert!(out.html.starts_with("a &lt; b &amp; "));
        assert!(out.html.ends_with(">utilize</mark>"));
    }

    #[test]
    fn test_annotate_escapes_replacement_attribute() {
        let cat = catalog(&[("utilize", "\"use\" & more")]);
        let out = annotate("utilize", &cat);
        assert!(out
            .html
            .contains("data-replacement=\"&quot;use&quot; &amp; more\""));
    }

    #[test]
    fn test_annotate_is_stable_for_same_buffer() {
        let cat = catalog(&[("utilize", "use"), ("in order to", "to")]);
        let text = "We utilize this in order to succeed.";
        assert_eq!(annotate(text, &cat), annotate(text, &cat));
    }

    #[test]
    fn test_apply_replacement_first_occurrence() {
        let out = apply_replacement("Please utilize this.", "utilize", "use");
        assert_eq!(out, "Please use this.");
    }

    #[test]
    fn test_apply_replacement_only_once() {
        let out = apply_replacement("utilize and utilize", "utilize", "use");
        assert_eq!(out, "use and utilize");
    }

    #[test]
    fn test_apply_replacement_missing_surface() {
        let out = apply_replacement("nothing here", "utilize", "use");
        assert_eq!(out, "nothing here");
    }

    #[test]
    fn test_apply_replacement_empty_surface() {
        let out = apply_replacement("nothing here", "", "use");
        assert_eq!(out, "nothing here");
    }

    #[test]
    fn test_substitution_then_reannotation_clears_marker() {
        let cat = catalog(&[("utilize", "use")]);
        let buffer = apply_replacement("Please utilize this.", "utilize", "use");
        assert_eq!(buffer, "Please use this.");
        let out = annotate(&buffer, &cat);
        assert!(out.spans.is_empty());
        assert_eq!(out.html, "Please use this.");
    }
}
