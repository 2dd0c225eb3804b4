// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Raw `q` and `page` values from the query string. When a key repeats, the
/// first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: String,
    pub page: Option<String>,
}

impl SearchParams {
    pub fn parse(query: Option<&str>) -> Result<Self, ApplicationError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or_default())
            .map_err(|e| ApplicationError::validation(format!("malformed query string: {e}")))?;

        let mut params = Self::default();
        let mut seen_q = false;
        for (key, value) in pairs {
            match key.as_str() {
                "q" if !seen_q => {
                    params.q = value;
                    seen_q = true;
                }
                "page" if params.page.is_none() => params.page = Some(value),
                _ => {}
            }
        }
        Ok(params)
    }
}

impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::parse(parts.uri.query()).map_err(HttpError::from_error)
    }
}
