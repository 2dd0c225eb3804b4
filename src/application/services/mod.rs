// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{ports::NewsSourcePort, queries::news::NewsQueryService};

pub struct ApplicationServices {
    pub news_queries: Arc<NewsQueryService>,
}

impl ApplicationServices {
    pub fn new(news_source: Arc<NewsSourcePort>) -> Self {
        let news_queries = Arc::new(NewsQueryService::new(Arc::clone(&news_source)));

        Self { news_queries }
    }
}
