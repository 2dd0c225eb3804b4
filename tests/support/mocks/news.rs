// tests/support/mocks/news.rs
use async_trait::async_trait;
use news_finder::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::news::{NewsQuery, NewsSource},
};
use news_finder::domain::news::SearchResults;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 固定の検索結果を返し、受け取ったクエリを記録するニュースソース
pub struct CountingNewsSource {
    results: SearchResults,
    calls: AtomicUsize,
    queries: Mutex<Vec<NewsQuery>>,
}

impl CountingNewsSource {
    pub fn new(results: SearchResults) -> Self {
        Self {
            results,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<NewsQuery> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[async_trait]
impl NewsSource for CountingNewsSource {
    async fn search(&self, query: &NewsQuery) -> ApplicationResult<SearchResults> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().expect("queries lock").push(query.clone());
        Ok(self.results.clone())
    }
}

/// 常に指定のエラーで失敗するニュースソース
pub struct FailingNewsSource {
    make_error: fn() -> ApplicationError,
    calls: AtomicUsize,
}

impl FailingNewsSource {
    pub fn new(make_error: fn() -> ApplicationError) -> Self {
        Self {
            make_error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for FailingNewsSource {
    async fn search(&self, _query: &NewsQuery) -> ApplicationResult<SearchResults> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err((self.make_error)())
    }
}
