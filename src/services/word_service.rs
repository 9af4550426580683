//! Domain service for dictionary lookups over the word cache.

use crate::db::WordListQuery;
use crate::models::word::{LanguagePair, Word};
use crate::services::translator::TranslateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Translation failed: {0}")]
    Translation(#[from] TranslateError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for WordError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Cache-or-fetch dictionary operations.
///
/// Handlers never touch the store or the provider directly; everything
/// goes through this trait, which also gives tests a seam for fakes.
#[async_trait::async_trait]
pub trait WordService: Send + Sync {
    /// Returns the cached record for (`word`, `pair`), fetching from the
    /// translation provider and persisting a new record on a miss.
    ///
    /// # Errors
    ///
    /// - [`WordError::Translation`] when the provider fails on a miss;
    ///   nothing is persisted on that path.
    /// - [`WordError::Database`] on store failures.
    async fn lookup(&self, word: &str, pair: LanguagePair) -> Result<Word, WordError>;

    /// Lists cached records: filter, then sort, then paginate.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Database`] on store failures.
    async fn list(&self, query: WordListQuery) -> Result<Vec<Word>, WordError>;

    /// Deletes cache entries for `word` (every language pair when `pair`
    /// is `None`). Returns the number of rows removed; zero is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Database`] on store failures.
    async fn delete(&self, word: &str, pair: Option<LanguagePair>) -> Result<u64, WordError>;
}
