use crate::entities::{prelude::*, word};
use crate::models::word::{LanguagePair, Word};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;

/// A `words` column that listing requests may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    CreatedDate,
    ModifiedDate,
    Word,
    SourceLanguage,
    TranslateLanguage,
    Definitions,
    Synonyms,
    Translations,
    Examples,
}

impl SortField {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "created_date" => Some(Self::CreatedDate),
            "modified_date" => Some(Self::ModifiedDate),
            "word" => Some(Self::Word),
            "source_language" => Some(Self::SourceLanguage),
            "translate_language" => Some(Self::TranslateLanguage),
            "definitions" => Some(Self::Definitions),
            "synonyms" => Some(Self::Synonyms),
            "translations" => Some(Self::Translations),
            "examples" => Some(Self::Examples),
            _ => None,
        }
    }

    const fn column(self) -> word::Column {
        match self {
            Self::Id => word::Column::Id,
            Self::CreatedDate => word::Column::CreatedDate,
            Self::ModifiedDate => word::Column::ModifiedDate,
            Self::Word => word::Column::Word,
            Self::SourceLanguage => word::Column::SourceLanguage,
            Self::TranslateLanguage => word::Column::TranslateLanguage,
            Self::Definitions => word::Column::Definitions,
            Self::Synonyms => word::Column::Synonyms,
            Self::Translations => word::Column::Translations,
            Self::Examples => word::Column::Examples,
        }
    }
}

/// Parsed `sort` parameter: a field name, `-`-prefixed for descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub descending: bool,
}

impl SortSpec {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (name, descending) = raw
            .strip_prefix('-')
            .map_or((raw, false), |rest| (rest, true));

        SortField::from_name(name).map(|field| Self { field, descending })
    }
}

/// Filter/sort/pagination inputs for the listing query, applied in that
/// order.
#[derive(Debug, Clone, Default)]
pub struct WordListQuery {
    pub filter: Option<String>,
    pub sort: Option<SortSpec>,
    pub offset: u64,
    pub limit: u64,
}

pub struct WordRepository {
    conn: DatabaseConnection,
}

impl WordRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_word(model: word::Model) -> Word {
        Word {
            id: model.id,
            created_date: model.created_date,
            modified_date: model.modified_date,
            word: model.word,
            source_language: model.source_language,
            translate_language: model.translate_language,
            definitions: serde_json::from_str(&model.definitions).unwrap_or_default(),
            synonyms: serde_json::from_str(&model.synonyms).unwrap_or_default(),
            translations: serde_json::from_str(&model.translations).unwrap_or_default(),
            examples: serde_json::from_str(&model.examples).unwrap_or_default(),
        }
    }

    fn encode_list(values: &[String]) -> String {
        serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
    }

    pub async fn find(&self, lookup: &str, pair: &LanguagePair) -> anyhow::Result<Option<Word>> {
        let model = Words::find()
            .filter(word::Column::Word.eq(lookup))
            .filter(word::Column::SourceLanguage.eq(&pair.source))
            .filter(word::Column::TranslateLanguage.eq(&pair.target))
            .one(&self.conn)
            .await?;

        Ok(model.map(Self::map_model_to_word))
    }

    pub async fn insert(&self, entry: &Word) -> anyhow::Result<()> {
        let active_model = word::ActiveModel {
            id: Set(entry.id.clone()),
            created_date: Set(entry.created_date.clone()),
            modified_date: Set(entry.modified_date.clone()),
            word: Set(entry.word.clone()),
            source_language: Set(entry.source_language.clone()),
            translate_language: Set(entry.translate_language.clone()),
            definitions: Set(Self::encode_list(&entry.definitions)),
            synonyms: Set(Self::encode_list(&entry.synonyms)),
            translations: Set(Self::encode_list(&entry.translations)),
            examples: Set(Self::encode_list(&entry.examples)),
        };

        Words::insert(active_model).exec(&self.conn).await?;

        info!(
            "Cached word: {} ({}->{})",
            entry.word, entry.source_language, entry.translate_language
        );
        Ok(())
    }

    pub async fn list(&self, params: &WordListQuery) -> anyhow::Result<Vec<Word>> {
        let mut query = Words::find();

        if let Some(filter) = &params.filter {
            // LIKE is case-insensitive for ASCII on SQLite, which is the
            // substring semantics the listing contract wants.
            query = query.filter(word::Column::Word.contains(filter));
        }

        if let Some(sort) = &params.sort {
            query = if sort.descending {
                query.order_by_desc(sort.field.column())
            } else {
                query.order_by_asc(sort.field.column())
            };
        }

        let rows = query
            .offset(params.offset)
            .limit(params.limit)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_word).collect())
    }

    /// Deletes cache entries for `lookup`; all language pairs when `pair`
    /// is `None`. Returns the number of rows removed (zero is fine).
    pub async fn delete(
        &self,
        lookup: &str,
        pair: Option<&LanguagePair>,
    ) -> anyhow::Result<u64> {
        let mut delete = Words::delete_many().filter(word::Column::Word.eq(lookup));

        if let Some(pair) = pair {
            delete = delete
                .filter(word::Column::SourceLanguage.eq(&pair.source))
                .filter(word::Column::TranslateLanguage.eq(&pair.target));
        }

        let result = delete.exec(&self.conn).await?;

        if result.rows_affected > 0 {
            info!("Deleted {} cache entries for '{}'", result.rows_affected, lookup);
        }
        Ok(result.rows_affected)
    }
}
