//! One-shot CSV loading for the phrase catalog
//!
//! The source is a CSV file whose header row must contain the columns
//! "Word or phrase" and "Replacement". Extra columns are ignored, quoted
//! commas are handled by the CSV reader, and rows whose two relevant
//! fields are both empty are dropped. There are no retries: the loader
//! runs once at startup and a failure leaves the catalog empty.

use std::fs::File;
use std::path::Path;

use thiserror::Error;

use super::models::{Catalog, PhraseEntry};

/// Column header for the complex phrase.
const PHRASE_COLUMN: &str = "Word or phrase";

/// Column header for the suggested replacement.
const REPLACEMENT_COLUMN: &str = "Replacement";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Load the phrase catalog from a CSV file.
///
/// Rows that fail to parse are skipped silently; only opening the file,
/// reading the header row, or a missing required column is an error.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let phrase_col = headers
        .iter()
        .position(|h| h.trim() == PHRASE_COLUMN)
        .ok_or(CatalogError::MissingColumn(PHRASE_COLUMN))?;
    let replacement_col = headers
        .iter()
        .position(|h| h.trim() == REPLACEMENT_COLUMN)
        .ok_or(CatalogError::MissingColumn(REPLACEMENT_COLUMN))?;

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(_) => continue,
        };

        let phrase = record.get(phrase_col).unwrap_or("").trim();
        let replacement = record.get(replacement_col).unwrap_or("").trim();
        if phrase.is_empty() && replacement.is_empty() {
            continue;
        }

        entries.push(PhraseEntry::new(phrase, replacement));
    }

    Ok(Catalog::new(entries))
}
