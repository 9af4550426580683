use crate::config::TranslatorConfig;
use crate::models::word::LanguagePair;
use crate::services::translator::{TranslateError, Translator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: Option<TranslateData>,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Cloud Translation v2 client (API-key based). Returns the single
/// translated string as a one-element list, matching the `Translator`
/// contract.
#[derive(Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    config: TranslatorConfig,
}

impl GoogleTranslateClient {
    #[must_use]
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_seconds.into()))
                .user_agent("Lexirr/1.0")
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    async fn request_once(
        &self,
        word: &str,
        pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError> {
        let request = TranslateRequest {
            q: word,
            source: &pair.source,
            target: &pair.target,
            format: "text",
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;

        extract_translations(body)
    }
}

fn extract_translations(body: TranslateResponse) -> Result<Vec<String>, TranslateError> {
    let data = body
        .data
        .ok_or_else(|| TranslateError::Parse("missing 'data' object".to_string()))?;

    Ok(data
        .translations
        .into_iter()
        .map(|t| t.translated_text)
        .collect())
}

#[async_trait::async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(
        &self,
        word: &str,
        pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError> {
        let mut last_err = None;

        for attempt in 1..=self.config.max_attempts {
            match self.request_once(word, pair).await {
                Ok(translations) if translations.is_empty() => {
                    return Err(TranslateError::Empty(word.to_string()));
                }
                Ok(translations) => return Ok(translations),
                Err(e) if e.is_transient() && attempt < self.config.max_attempts => {
                    warn!(
                        "Translation attempt {}/{} for '{}' failed: {}",
                        attempt, self.config.max_attempts, word, e
                    );
                    tokio::time::sleep(Duration::from_millis(250 * u64::from(attempt))).await;
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err
            .unwrap_or_else(|| TranslateError::Parse("retries exhausted".to_string())))
    }
}
