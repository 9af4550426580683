use serde::Serialize;

use crate::models::word::Word;

/// Complete projection of a cached word record.
#[derive(Debug, Serialize)]
pub struct WordFull {
    pub word: String,
    pub definitions: Vec<String>,
    pub synonyms: Vec<String>,
    pub translations: Vec<String>,
    pub examples: Vec<String>,
}

/// Reduced projection used by the default listing view.
#[derive(Debug, Serialize)]
pub struct WordShort {
    pub word: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WordView {
    Full(WordFull),
    Short(WordShort),
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

impl From<Word> for WordFull {
    fn from(word: Word) -> Self {
        Self {
            word: word.word,
            definitions: word.definitions,
            synonyms: word.synonyms,
            translations: word.translations,
            examples: word.examples,
        }
    }
}

impl From<Word> for WordShort {
    fn from(word: Word) -> Self {
        Self {
            word: word.word,
            examples: word.examples,
        }
    }
}
