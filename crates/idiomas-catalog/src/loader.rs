//! Loading of the word dataset.

use std::{fs, path::Path};

use crate::{Catalog, error::CatalogError, models::Word};

/// Dataset compiled into the binary, served when no path is configured
pub const BUNDLED_WORDS: &str = include_str!("../data/base_words.json");

/// Parse a JSON array of word objects, keeping the source order.
pub fn parse_words(json: &str) -> Result<Vec<Word>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse the dataset at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Catalog::new(parse_words(&raw)?))
}

/// Parse the dataset embedded at build time.
pub fn bundled() -> Result<Catalog, CatalogError> {
    Ok(Catalog::new(parse_words(BUNDLED_WORDS)?))
}

/// Load the dataset at `path`, degrading to an empty catalog on any failure.
///
/// The service should still boot when the dataset is missing or malformed;
/// the failure is logged and every query then sees an empty catalog.
pub fn load_or_empty(path: impl AsRef<Path>) -> Catalog {
    let path = path.as_ref();
    or_empty(load(path), &path.display().to_string())
}

/// Embedded dataset, or an empty catalog if it does not parse.
pub fn bundled_or_empty() -> Catalog {
    or_empty(bundled(), "<bundled>")
}

fn or_empty(result: Result<Catalog, CatalogError>, source: &str) -> Catalog {
    match result {
        Ok(catalog) => {
            tracing::info!(
                source,
                words = catalog.len(),
                themes = catalog.themes().len(),
                "Word catalog loaded"
            );
            catalog
        }
        Err(e) => {
            tracing::warn!(source, "Failed to load word catalog, serving an empty one: {e}");
            Catalog::empty()
        }
    }
}
