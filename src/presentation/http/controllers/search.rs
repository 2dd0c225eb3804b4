// src/presentation/http/controllers/search.rs
use crate::application::{dto::SearchView, error::ApplicationError, queries::news::SearchNewsQuery};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::SearchParams;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{Extension, response::Html};

/// Landing page with an empty search form. Never touches the news API.
pub async fn index() -> HttpResult<Html<String>> {
    render(None)
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    params: SearchParams,
) -> HttpResult<Html<String>> {
    let search = state
        .services
        .news_queries
        .search_news(SearchNewsQuery {
            term: params.q,
            page: params.page,
        })
        .await
        .into_http()?;

    tracing::debug!(
        total_results = search.results.total_results,
        total_pages = search.total_pages,
        "rendering search results"
    );

    let view = SearchView::from(search);
    render(Some(&view))
}

fn render(view: Option<&SearchView>) -> HttpResult<Html<String>> {
    views::render_page(view).map(Html).map_err(|e| {
        HttpError::from_error(ApplicationError::infrastructure(format!(
            "render failed: {e}"
        )))
    })
}
