// tests/support/builders.rs
use super::mocks::fixed_now;
use news_finder::domain::news::{Article, SearchResults, Source};

/// テスト用の記事を組み立てる
pub fn sample_article(title: &str) -> Article {
    Article {
        source: Source {
            id: Some("kompas".into()),
            name: "Kompas.com".into(),
        },
        author: "Redaksi".into(),
        title: title.into(),
        description: format!("Ringkasan: {title}"),
        url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        url_to_image: "https://example.com/image.jpg".into(),
        published_at: Some(fixed_now()),
        content: "Isi berita".into(),
    }
}

/// 総件数と記事タイトルから検索結果を組み立てる
pub fn sample_results(total_results: u64, titles: &[&str]) -> SearchResults {
    SearchResults {
        status: "ok".into(),
        total_results,
        articles: titles.iter().map(|t| sample_article(t)).collect(),
    }
}

/// NewsAPI 形式の JSON 本文
pub fn sample_payload(total_results: u64, titles: &[&str]) -> String {
    let articles: Vec<serde_json::Value> = titles
        .iter()
        .map(|title| {
            serde_json::json!({
                "source": { "id": null, "name": "Antara" },
                "author": null,
                "title": title,
                "description": "Hujan deras sejak pagi.",
                "url": "https://example.com/news",
                "urlToImage": null,
                "publishedAt": "2024-10-05T08:30:00Z",
                "content": "Jakarta - ..."
            })
        })
        .collect();

    serde_json::json!({
        "status": "ok",
        "totalResults": total_results,
        "articles": articles,
    })
    .to_string()
}
