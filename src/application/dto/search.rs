use crate::domain::news::{Article, Search};

/// Everything the results page needs, flattened out of [`Search`].
///
/// `next_page` is the page that was fetched for this request. The link
/// targets are precomputed so the page never renders out-of-range links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub term: String,
    pub next_page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub previous_link: Option<u32>,
    pub following_link: Option<u32>,
    pub articles: Vec<ArticleView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub source_name: String,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
    pub published_on: String,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        let published_on = article.formatted_published_date();
        Self {
            source_name: article.source.name,
            author: article.author,
            title: article.title,
            description: article.description,
            url: article.url,
            image_url: article.url_to_image,
            published_on,
        }
    }
}

impl From<Search> for SearchView {
    fn from(search: Search) -> Self {
        // current_page() trails next_page by one once past the first page,
        // which is exactly the page before the one being shown.
        let previous_link = (search.next_page.get() > 1).then(|| search.current_page());
        let following_link = search.following_page();

        Self {
            term: search.term.into(),
            next_page: search.next_page.get(),
            total_pages: search.total_pages,
            total_results: search.results.total_results,
            previous_link,
            following_link,
            articles: search
                .results
                .articles
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
