//! In-memory word catalog for App Idiomas.
//!
//! The catalog is loaded once at startup and never mutated afterwards, so it
//! can be shared between request handlers behind an `Arc` without locking.

pub mod error;
pub mod index;
pub mod loader;
pub mod models;

pub use error::CatalogError;
pub use loader::{BUNDLED_WORDS, bundled, bundled_or_empty, load, load_or_empty};
pub use models::{Theme, Word};

/// Immutable collection of words with its theme index cached alongside.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    words: Vec<Word>,
    themes: Vec<Theme>,
}

impl Catalog {
    /// Build a catalog from words in display order.
    pub fn new(words: Vec<Word>) -> Self {
        let themes = index::build_theme_index(&words);
        Self { words, themes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All themes with their word counts, sorted by name.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Words whose theme matches `theme` ignoring case, in catalog order.
    ///
    /// A theme that never existed and one without members are reported the
    /// same way, as [`CatalogError::ThemeNotFound`].
    pub fn words_by_theme(&self, theme: &str) -> Result<Vec<&Word>, CatalogError> {
        let query = index::fold_theme(theme);
        let words: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| index::theme_matches(&w.theme, &query))
            .collect();

        if words.is_empty() {
            return Err(CatalogError::ThemeNotFound(theme.to_string()));
        }

        Ok(words)
    }
}

impl From<Vec<Word>> for Catalog {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}
