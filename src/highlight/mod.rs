//! Highlight engine: annotates free-form text with clickable phrase markers
//!
//! This module provides:
//! - Variant derivation from catalog phrases (comma-split, parentheticals
//!   stripped)
//! - Span computation over the raw text buffer (first-catalog-order wins
//!   on overlap)
//! - HTML rendering of the annotated output
//! - The click-substitution primitive

pub mod engine;
pub mod variants;

pub use engine::*;
