//! NewsAPI `v2/everything` client.

use crate::{
    application::{
        ApplicationResult,
        error::ApplicationError,
        ports::news::{NewsQuery, NewsSource},
    },
    config::AppConfig,
    domain::news::{Article, SearchResults, Source},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Request, StatusCode};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub struct NewsApiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl NewsApiClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApplicationError::infrastructure(format!("http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            language: language.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> ApplicationResult<Self> {
        Self::new(
            config.news_api_url(),
            config.news_api_key(),
            config.news_api_language(),
            config.upstream_timeout(),
        )
    }

    /// Builds the outbound GET. Parameters are form-encoded, so the search
    /// term is escaped the same way a browser would.
    pub fn build_request(&self, query: &NewsQuery) -> ApplicationResult<Request> {
        let page_size = query.page_size.to_string();
        let page = query.page.to_string();

        self.client
            .get(&self.endpoint)
            .query(&[
                ("q", query.term.as_str()),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
                ("apiKey", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .build()
            .map_err(|e| ApplicationError::infrastructure(format!("invalid upstream request: {e}")))
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search(&self, query: &NewsQuery) -> ApplicationResult<SearchResults> {
        let request = self.build_request(query)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                message = %upstream_error_message(&body),
                "news api rejected request"
            );
            return Err(ApplicationError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;

        decode_results(&body)
    }
}

/// Decodes an `everything` payload. Unknown fields are ignored; any syntax or
/// type error discards the whole body.
pub fn decode_results(body: &[u8]) -> ApplicationResult<SearchResults> {
    let payload: EverythingResponse =
        serde_json::from_slice(body).map_err(|e| ApplicationError::decode(e.to_string()))?;
    Ok(payload.into())
}

fn transport_error(err: reqwest::Error) -> ApplicationError {
    if err.is_timeout() {
        ApplicationError::Timeout
    } else {
        // the url carries the api key
        ApplicationError::upstream(err.without_url().to_string())
    }
}

fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.message)
        .unwrap_or_else(|| body.chars().take(200).collect())
}

// ============================================
// Wire types
// ============================================

// NewsAPI sends `null` for fields it has nothing for; treat it like absent.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    total_results: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    articles: Vec<Option<ArticlePayload>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticlePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    source: SourcePayload,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SourcePayload {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

impl From<EverythingResponse> for SearchResults {
    fn from(payload: EverythingResponse) -> Self {
        Self {
            status: payload.status,
            total_results: payload.total_results,
            articles: payload
                .articles
                .into_iter()
                .map(|article| article.unwrap_or_default().into())
                .collect(),
        }
    }
}

impl From<ArticlePayload> for Article {
    fn from(payload: ArticlePayload) -> Self {
        Self {
            source: Source {
                id: payload.source.id,
                name: payload.source.name.unwrap_or_default(),
            },
            author: payload.author.unwrap_or_default(),
            title: payload.title.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            url: payload.url.unwrap_or_default(),
            url_to_image: payload.url_to_image.unwrap_or_default(),
            published_at: payload.published_at,
            content: payload.content.unwrap_or_default(),
        }
    }
}
