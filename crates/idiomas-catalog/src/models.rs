use serde::{Deserialize, Serialize};

/// Word model - a vocabulary entry shown on a flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Stable identifier, unique across the catalog by data convention
    pub id: String,
    /// Theme label as written in the dataset
    pub theme: String,
    /// Term in the source language (English)
    #[serde(rename = "en")]
    pub term_source: String,
    /// Term in the target language (Spanish)
    #[serde(rename = "es")]
    pub term_target: String,
    /// Image URL or emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Usage example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Theme model - aggregate view over the words sharing a theme label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme label with its original casing
    pub name: String,
    /// Number of words carrying this exact label
    pub count: usize,
}
