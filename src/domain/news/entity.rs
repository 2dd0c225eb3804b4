use chrono::{DateTime, Utc};

/// Publisher of an article. NewsAPI only sends an `id` for sources it knows
/// about, otherwise it is `null` or missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub source: Source,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: Option<DateTime<Utc>>,
    pub content: String,
}

impl Article {
    /// Publication date as `"October 5, 2024"`, or an empty string when the
    /// upstream did not send a timestamp.
    pub fn formatted_published_date(&self) -> String {
        self.published_at
            .map(|at| at.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

/// One page of upstream results. Articles keep the order the API returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub status: String,
    pub total_results: u64,
    pub articles: Vec<Article>,
}
