use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::google_translate::GoogleTranslateClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::{SeaOrmWordService, Translator, WordService};

mod error;
mod system;
mod types;
pub mod validation;
mod words;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub words: Arc<dyn WordService>,
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let translator = Arc::new(GoogleTranslateClient::new(config.translator.clone()));
    create_app_state_with_translator(config, translator).await
}

/// Wires the state with an explicit provider realization. Tests use this
/// to swap in a fake translator.
pub async fn create_app_state_with_translator(
    config: Config,
    translator: Arc<dyn Translator>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let words = Arc::new(SeaOrmWordService::new(store.clone(), translator));

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        store,
        words,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/word/{word}", get(words::get_word_details))
        .route("/word/{word}", delete(words::delete_word))
        .route("/words", get(words::list_words))
        .route("/health", get(system::health))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
