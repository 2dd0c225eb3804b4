// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    news_api_key: String,
    news_api_url: String,
    news_api_language: String,
    upstream_timeout: Duration,
    bind_host: String,
    port: u16,
    assets_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_news_api_url() -> String {
    "https://newsapi.org/v2/everything".into()
}

fn default_news_api_language() -> String {
    "id".into()
}

fn default_bind_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl AppConfig {
    /// Build configuration from environment variables. `.env` files are
    /// honoured when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let news_api_key = get("NEWS_API_KEY").ok_or(ConfigError::Missing("NEWS_API_KEY"))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got {raw:?}")))?,
            None => default_port(),
        };

        let timeout_secs = match get("NEWS_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "NEWS_API_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                ))
            })?,
            None => default_timeout_secs(),
        };

        Ok(Self {
            news_api_key,
            news_api_url: get("NEWS_API_URL").unwrap_or_else(default_news_api_url),
            news_api_language: get("NEWS_API_LANGUAGE").unwrap_or_else(default_news_api_language),
            upstream_timeout: Duration::from_secs(timeout_secs),
            bind_host: get("BIND_HOST").unwrap_or_else(default_bind_host),
            port,
            assets_dir: get("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_assets_dir),
        })
    }

    pub fn news_api_key(&self) -> &str {
        &self.news_api_key
    }

    pub fn news_api_url(&self) -> &str {
        &self.news_api_url
    }

    pub fn news_api_language(&self) -> &str {
        &self.news_api_language
    }

    pub fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    pub fn assets_dir(&self) -> &PathBuf {
        &self.assets_dir
    }
}
