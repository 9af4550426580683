//! Abstraction over the external translation source.
//!
//! The lookup flow only sees this trait, so the active realization (a
//! managed cloud API today, possibly a scrape-based one later) is an
//! implementation detail of process wiring.

use crate::models::word::LanguagePair;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected translation response shape: {0}")]
    Parse(String),

    #[error("no translation returned for '{0}'")]
    Empty(String),
}

impl TranslateError {
    /// Whether retrying the same request could plausibly succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::Parse(_) | Self::Empty(_) => false,
        }
    }
}

/// A possibly-slow, possibly-failing translation capability: one word in,
/// an ordered list of translated strings out.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        word: &str,
        pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError>;
}
