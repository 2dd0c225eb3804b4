use super::NewsQueryService;
use crate::{
    application::{error::ApplicationResult, ports::news::NewsQuery},
    domain::news::{PAGE_SIZE, PageNumber, Search, SearchTerm},
};

/// Raw search input as it arrived on the query string.
pub struct SearchNewsQuery {
    pub term: String,
    pub page: Option<String>,
}

impl NewsQueryService {
    pub async fn search_news(&self, query: SearchNewsQuery) -> ApplicationResult<Search> {
        let page = PageNumber::parse(query.page.as_deref())?;
        let term = SearchTerm::new(query.term);

        tracing::info!(search_term = %term, page = page.get(), "searching news");

        let request = NewsQuery {
            term: term.clone(),
            page,
            page_size: PAGE_SIZE,
        };
        let results = self.source.search(&request).await?;

        Ok(Search::new(term, page, results))
    }
}
