use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use lexirr::config::Config;
use lexirr::models::word::LanguagePair;
use lexirr::services::{TranslateError, Translator};

/// Provider fake: deterministic output, call counter, no network.
struct FakeTranslator {
    calls: AtomicUsize,
}

impl FakeTranslator {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        word: &str,
        pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![format!("{word}-{}", pair.target)])
    }
}

/// Provider fake that always fails, for the no-persist-on-failure path.
struct BrokenTranslator;

#[async_trait::async_trait]
impl Translator for BrokenTranslator {
    async fn translate(
        &self,
        _word: &str,
        _pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError> {
        Err(TranslateError::Parse(
            "result block not found".to_string(),
        ))
    }
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    // A shared pool against :memory: would give every connection its own
    // database; keep it at one.
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;
    config
}

async fn spawn_app() -> (Router, Arc<FakeTranslator>) {
    let translator = FakeTranslator::new();

    let state = lexirr::api::create_app_state_with_translator(test_config(), translator.clone())
        .await
        .expect("Failed to create app state");

    (lexirr::api::router(state), translator)
}

async fn spawn_broken_app() -> Router {
    let state =
        lexirr::api::create_app_state_with_translator(test_config(), Arc::new(BrokenTranslator))
            .await
            .expect("Failed to create app state");

    lexirr::api::router(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn delete_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_lookup_miss_creates_record() {
    let (app, translator) = spawn_app().await;

    let (status, body) = get_json(&app, "/word/cat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "cat");
    assert_eq!(body["translations"], serde_json::json!(["cat-ru"]));
    assert_eq!(
        body["definitions"],
        serde_json::json!(["Definition 1", "Definition 2"])
    );
    assert_eq!(translator.call_count(), 1);

    let (status, list) = get_json(&app, "/words?is_full=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["translations"], serde_json::json!(["cat-ru"]));
}

#[tokio::test]
async fn test_lookup_hit_skips_provider() {
    let (app, translator) = spawn_app().await;

    let (status, first) = get_json(&app, "/word/cat").await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = get_json(&app, "/word/cat").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(first, second);
    assert_eq!(translator.call_count(), 1);
}

#[tokio::test]
async fn test_language_pairs_cache_independently() {
    let (app, translator) = spawn_app().await;

    let (status, ru) = get_json(&app, "/word/cat?source_lang=en&translate_lang=ru").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ru["translations"], serde_json::json!(["cat-ru"]));

    let (status, de) = get_json(&app, "/word/cat?source_lang=en&translate_lang=de").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(de["translations"], serde_json::json!(["cat-de"]));

    assert_eq!(translator.call_count(), 2);

    let (_, list) = get_json(&app, "/words").await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_language_codes_are_case_normalized() {
    let (app, translator) = spawn_app().await;

    let (status, _) = get_json(&app, "/word/cat?source_lang=EN&translate_lang=RU").await;
    assert_eq!(status, StatusCode::OK);

    // Same pair, different casing: must be a cache hit.
    let (status, _) = get_json(&app, "/word/cat?source_lang=en&translate_lang=ru").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(translator.call_count(), 1);
}

#[tokio::test]
async fn test_multi_word_input_rejected_before_provider() {
    let (app, translator) = spawn_app().await;

    let (status, body) = get_json(&app, "/word/two%20words").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Must be just a single word");
    assert_eq!(translator.call_count(), 0);

    let (_, list) = get_json(&app, "/words").await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_malformed_language_code_rejected() {
    let (app, translator) = spawn_app().await;

    let (status, _) = get_json(&app, "/word/cat?translate_lang=rus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/word/cat?source_lang=e1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(translator.call_count(), 0);
}

#[tokio::test]
async fn test_provider_failure_persists_nothing() {
    let app = spawn_broken_app().await;

    let (status, body) = get_json(&app, "/word/cat").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Translation failed")
    );

    let (status, list) = get_json(&app, "/words").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_filter_is_case_insensitive() {
    let (app, _) = spawn_app().await;

    for word in ["scatter", "CATALOG", "dog"] {
        let (status, _) = get_json(&app, &format!("/word/{word}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, list) = get_json(&app, "/words?filter=cat").await;
    assert_eq!(status, StatusCode::OK);

    let words: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["word"].as_str().unwrap())
        .collect();

    assert_eq!(words.len(), 2);
    assert!(words.contains(&"scatter"));
    assert!(words.contains(&"CATALOG"));
}

#[tokio::test]
async fn test_list_sort_descending_by_word() {
    let (app, _) = spawn_app().await;

    for word in ["banana", "apple", "cherry"] {
        get_json(&app, &format!("/word/{word}")).await;
    }

    let (status, list) = get_json(&app, "/words?sort=-word").await;
    assert_eq!(status, StatusCode::OK);

    let words: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["word"].as_str().unwrap())
        .collect();

    assert_eq!(words, vec!["cherry", "banana", "apple"]);
}

#[tokio::test]
async fn test_list_pagination_after_sort() {
    let (app, _) = spawn_app().await;

    for i in 0..12 {
        get_json(&app, &format!("/word/word{i:02}")).await;
    }

    let (status, list) = get_json(&app, "/words?sort=word&limit=5&offset=5").await;
    assert_eq!(status, StatusCode::OK);

    let words: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["word"].as_str().unwrap())
        .collect();

    assert_eq!(words, vec!["word05", "word06", "word07", "word08", "word09"]);
}

#[tokio::test]
async fn test_list_short_and_full_views() {
    let (app, _) = spawn_app().await;
    get_json(&app, "/word/cat").await;

    let (_, short) = get_json(&app, "/words").await;
    let entry = &short.as_array().unwrap()[0];
    assert!(entry.get("word").is_some());
    assert!(entry.get("examples").is_some());
    assert!(entry.get("translations").is_none());

    let (_, full) = get_json(&app, "/words?is_full=1").await;
    let entry = &full.as_array().unwrap()[0];
    assert!(entry.get("translations").is_some());
    assert!(entry.get("definitions").is_some());
    assert!(entry.get("synonyms").is_some());
}

#[tokio::test]
async fn test_list_validation_errors() {
    let (app, _) = spawn_app().await;

    let (status, body) = get_json(&app, "/words?sort=-no_such_field").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown sort field: 'no_such_field'");

    let (status, _) = get_json(&app, "/words?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/words?limit=101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/words?is_full=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_empty_is_ok() {
    let (app, _) = spawn_app().await;

    let (status, list) = get_json(&app, "/words").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, serde_json::json!([]));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (app, _) = spawn_app().await;

    let (status, body) = delete_json(&app, "/word/ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Word 'ghost' deleted successfully");

    let (_, list) = get_json(&app, "/words").await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_removes_all_language_pairs() {
    let (app, _) = spawn_app().await;

    get_json(&app, "/word/cat?translate_lang=ru").await;
    get_json(&app, "/word/cat?translate_lang=de").await;

    let (status, body) = delete_json(&app, "/word/cat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Word 'cat' deleted successfully");

    let (_, list) = get_json(&app, "/words").await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_can_target_one_pair() {
    let (app, _) = spawn_app().await;

    get_json(&app, "/word/cat?translate_lang=ru").await;
    get_json(&app, "/word/cat?translate_lang=de").await;

    let (status, _) =
        delete_json(&app, "/word/cat?source_lang=en&translate_lang=de").await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get_json(&app, "/words?is_full=1").await;
    let entries = list.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["translations"], serde_json::json!(["cat-ru"]));
}

#[tokio::test]
async fn test_delete_rejects_half_a_pair() {
    let (app, _) = spawn_app().await;

    let (status, _) = delete_json(&app, "/word/cat?source_lang=en").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrent_first_lookups_leave_one_record() {
    let (app, _) = spawn_app().await;

    let (first, second) = tokio::join!(
        get_json(&app, "/word/cat"),
        get_json(&app, "/word/cat"),
    );

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);
    assert_eq!(first.1["translations"], second.1["translations"]);

    let (_, list) = get_json(&app, "/words").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = spawn_app().await;

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}
