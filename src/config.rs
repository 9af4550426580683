use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable that overrides the translator API key, so the
/// credential never has to live in config.toml.
pub const API_KEY_ENV: &str = "LEXIRR_TRANSLATOR_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub translator: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/lexirr.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8321,
            cors_allowed_origins: vec![
                "http://localhost:8321".to_string(),
                "http://127.0.0.1:8321".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub base_url: String,

    /// API key for the translation endpoint. Usually left empty here and
    /// supplied via `LEXIRR_TRANSLATOR_API_KEY` instead.
    pub api_key: String,

    /// Two-letter code used when a lookup omits `source_lang`.
    pub default_source_lang: String,

    /// Two-letter code used when a lookup omits `translate_lang`.
    pub default_target_lang: String,

    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u32,

    /// Attempts per translation before giving up on transient failures.
    pub max_attempts: u32,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translation.googleapis.com/language/translate/v2".to_string(),
            api_key: String::new(),
            default_source_lang: "en".to_string(),
            default_target_lang: "ru".to_string(),
            request_timeout_seconds: 30,
            max_attempts: 3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            translator: TranslatorConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default().with_env_overrides())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            self.translator.api_key = key;
        }
        self
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("lexirr").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".lexirr").join("config.toml"));
        }

        paths
    }

    pub fn validate(&self) -> Result<()> {
        if self.translator.base_url.is_empty() {
            anyhow::bail!("Translator base URL cannot be empty");
        }

        if self.translator.max_attempts == 0 {
            anyhow::bail!("Translator max_attempts must be > 0");
        }

        for (name, code) in [
            ("default_source_lang", &self.translator.default_source_lang),
            ("default_target_lang", &self.translator.default_target_lang),
        ] {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_lowercase()) {
                anyhow::bail!("{name} must be a two-letter lowercase code, got '{code}'");
            }
        }

        Ok(())
    }
}
