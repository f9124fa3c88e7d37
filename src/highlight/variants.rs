//! Variant derivation and matcher construction
//!
//! A catalog phrase like "utilize (formal), make use of" describes two
//! interchangeable surface forms. Parenthesized annotations are stripped,
//! the remainder is split on commas, and each non-empty trimmed piece
//! becomes one variant with its own whole-word matcher.

use regex::Regex;

/// Matches parenthesized annotations inside a phrase, including the parens.
fn annotation_regex() -> Regex {
    Regex::new(r"\([^)]*\)").unwrap()
}

/// Derive the variant set for a phrase.
///
/// Strips all parenthesized substrings, splits on commas, trims each piece
/// and discards empty ones. A phrase that is nothing but annotations yields
/// an empty set.
pub fn variant_set(phrase: &str) -> Vec<String> {
    let stripped = annotation_regex().replace_all(phrase, "");
    stripped
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Build a case-insensitive whole-word matcher for a literal variant.
///
/// All regex metacharacters in the variant are escaped so matching is
/// literal. Returns `None` when the pattern fails to compile; the caller
/// treats that variant as matching nothing.
pub fn word_matcher(variant: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(variant))).ok()
}
