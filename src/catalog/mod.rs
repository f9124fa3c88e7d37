//! Phrase catalog: the loaded set of complex-phrase/replacement pairs
//!
//! This module provides:
//! - Catalog data models
//! - One-shot CSV loading at startup

pub mod loader;
pub mod models;

pub use loader::{load_catalog, CatalogError};
pub use models::*;
