use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DbErr, SqlErr};
use tracing::{debug, info};
use uuid::Uuid;

use crate::db::{Store, WordListQuery};
use crate::models::word::{LanguagePair, Word};
use crate::services::translator::Translator;
use crate::services::word_service::{WordError, WordService};

/// No definition/synonym/example source is wired up yet; new records get
/// fixed stand-in content next to the real translations.
fn placeholder_definitions() -> Vec<String> {
    vec!["Definition 1".to_string(), "Definition 2".to_string()]
}

fn placeholder_synonyms() -> Vec<String> {
    vec!["Synonym 1".to_string(), "Synonym 2".to_string()]
}

fn placeholder_examples() -> Vec<String> {
    vec!["Example 1".to_string(), "Example 2".to_string()]
}

pub struct SeaOrmWordService {
    store: Store,
    translator: Arc<dyn Translator>,
}

impl SeaOrmWordService {
    #[must_use]
    pub fn new(store: Store, translator: Arc<dyn Translator>) -> Self {
        Self { store, translator }
    }
}

fn db_err(err: anyhow::Error) -> WordError {
    WordError::Database(err.to_string())
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DbErr>().and_then(DbErr::sql_err),
        Some(SqlErr::UniqueConstraintViolation(_))
    )
}

#[async_trait::async_trait]
impl WordService for SeaOrmWordService {
    async fn lookup(&self, word: &str, pair: LanguagePair) -> Result<Word, WordError> {
        if let Some(existing) = self.store.find_word(word, &pair).await.map_err(db_err)? {
            debug!("Cache hit for '{}' ({})", word, pair);
            return Ok(existing);
        }

        // Single provider call per miss; a failure here surfaces to the
        // caller and leaves the store untouched.
        let translations = self.translator.translate(word, &pair).await?;

        let now = Utc::now().to_rfc3339();
        let entry = Word {
            id: Uuid::new_v4().to_string(),
            created_date: now.clone(),
            modified_date: now,
            word: word.to_string(),
            source_language: pair.source.clone(),
            translate_language: pair.target.clone(),
            definitions: placeholder_definitions(),
            synonyms: placeholder_synonyms(),
            translations,
            examples: placeholder_examples(),
        };

        match self.store.insert_word(&entry).await {
            Ok(()) => {
                info!("Cache miss for '{}' ({}) resolved via provider", word, pair);
                Ok(entry)
            }
            // Concurrent duplicate miss: another request inserted the same
            // key between our read and write. Benign; serve their row.
            Err(e) if is_unique_violation(&e) => {
                debug!("Lost insert race for '{}' ({}), re-reading", word, pair);
                self.store
                    .find_word(word, &pair)
                    .await
                    .map_err(db_err)?
                    .ok_or_else(|| {
                        WordError::Conflict(format!(
                            "Concurrent write for '{word}' left no readable entry"
                        ))
                    })
            }
            Err(e) => Err(db_err(e)),
        }
    }

    async fn list(&self, query: WordListQuery) -> Result<Vec<Word>, WordError> {
        self.store.list_words(&query).await.map_err(db_err)
    }

    async fn delete(&self, word: &str, pair: Option<LanguagePair>) -> Result<u64, WordError> {
        self.store
            .delete_words(word, pair.as_ref())
            .await
            .map_err(db_err)
    }
}
