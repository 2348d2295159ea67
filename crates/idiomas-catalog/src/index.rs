use std::collections::BTreeMap;

use crate::models::{Theme, Word};

/// Group words by their exact theme label and count members.
///
/// The result is sorted ascending by name. Labels that differ only in casing
/// are distinct entries here, even though lookups ignore case.
pub fn build_theme_index(words: &[Word]) -> Vec<Theme> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for word in words {
        *counts.entry(word.theme.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(name, count)| Theme {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Case folding applied to both sides of a theme lookup
pub fn fold_theme(theme: &str) -> String {
    theme.to_lowercase()
}

/// Whether `theme` matches a query already passed through [`fold_theme`].
pub fn theme_matches(theme: &str, folded_query: &str) -> bool {
    theme == folded_query || fold_theme(theme) == folded_query
}
