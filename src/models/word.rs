use serde::{Deserialize, Serialize};

/// A cached dictionary record. Written exactly once, on the first
/// successful lookup of a (word, language pair), and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub created_date: String,
    pub modified_date: String,
    pub word: String,
    pub source_language: String,
    pub translate_language: String,
    pub definitions: Vec<String>,
    pub synonyms: Vec<String>,
    pub translations: Vec<String>,
    pub examples: Vec<String>,
}

/// The translation direction a cache entry is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    #[must_use]
    pub const fn new(source: String, target: String) -> Self {
        Self { source, target }
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}
