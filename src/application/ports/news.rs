// src/application/ports/news.rs
use crate::{
    application::ApplicationResult,
    domain::news::{PageNumber, SearchResults, SearchTerm},
};
use async_trait::async_trait;

/// Parameters of one upstream lookup.
#[derive(Debug, Clone)]
pub struct NewsQuery {
    pub term: SearchTerm,
    pub page: PageNumber,
    pub page_size: u32,
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn search(&self, query: &NewsQuery) -> ApplicationResult<SearchResults>;
}
