use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, DeleteResponse, WordFull, WordShort, WordView};
use crate::api::validation::{
    DEFAULT_LIMIT, validate_is_full, validate_language_code, validate_limit, validate_sort,
    validate_word,
};
use crate::db::WordListQuery;
use crate::models::word::LanguagePair;

#[derive(Deserialize)]
pub struct LookupQuery {
    pub source_lang: Option<String>,
    pub translate_lang: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub is_full: Option<u8>,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub source_lang: Option<String>,
    pub translate_lang: Option<String>,
}

/// Resolves the translation direction for a request, falling back to the
/// configured defaults and lowercasing before use.
fn resolve_pair(
    state: &AppState,
    source_lang: Option<&str>,
    translate_lang: Option<&str>,
) -> Result<LanguagePair, ApiError> {
    let source = match source_lang {
        Some(raw) => validate_language_code("source_lang", raw)?,
        None => state.config.translator.default_source_lang.clone(),
    };

    let target = match translate_lang {
        Some(raw) => validate_language_code("translate_lang", raw)?,
        None => state.config.translator.default_target_lang.clone(),
    };

    Ok(LanguagePair::new(source, target))
}

pub async fn get_word_details(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<WordFull>, ApiError> {
    let word = validate_word(&word)?;
    let pair = resolve_pair(
        &state,
        params.source_lang.as_deref(),
        params.translate_lang.as_deref(),
    )?;

    let entry = state.words.lookup(word, pair).await?;

    Ok(Json(WordFull::from(entry)))
}

pub async fn list_words(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<WordView>>, ApiError> {
    let limit = validate_limit(params.limit.unwrap_or(DEFAULT_LIMIT))?;
    let is_full = validate_is_full(params.is_full.unwrap_or(0))?;
    let sort = params.sort.as_deref().map(validate_sort).transpose()?;

    let query = WordListQuery {
        filter: params.filter,
        sort,
        offset: params.offset.unwrap_or(0),
        limit,
    };

    let entries = state.words.list(query).await?;

    let views = entries
        .into_iter()
        .map(|entry| {
            if is_full {
                WordView::Full(WordFull::from(entry))
            } else {
                WordView::Short(WordShort::from(entry))
            }
        })
        .collect();

    Ok(Json(views))
}

pub async fn delete_word(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
    Query(params): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let word = validate_word(&word)?;

    // Either scope the deletion to one pair or wipe every pair for the
    // word; half a pair is ambiguous.
    let pair = match (params.source_lang.as_deref(), params.translate_lang.as_deref()) {
        (None, None) => None,
        (Some(source), Some(target)) => Some(LanguagePair::new(
            validate_language_code("source_lang", source)?,
            validate_language_code("translate_lang", target)?,
        )),
        _ => {
            return Err(ApiError::validation(
                "Provide both source_lang and translate_lang, or neither",
            ));
        }
    };

    state.words.delete(word, pair).await?;

    Ok(Json(DeleteResponse {
        message: format!("Word '{word}' deleted successfully"),
    }))
}
