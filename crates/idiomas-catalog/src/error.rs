use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read word dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed word dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme '{0}' not found or empty")]
    ThemeNotFound(String),
}
