// src/presentation/http/views.rs
//! HTML rendering for the search page.

use crate::application::dto::{ArticleView, SearchView};
use reqwest::Url;
use std::fmt::{self, Write};

const TITLE: &str = "News Finder";

/// Renders the full page. `None` renders the empty search form shown on `/`.
pub fn render_page(view: Option<&SearchView>) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(8 * 1024);
    let term = view.map(|v| v.term.as_str()).unwrap_or_default();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="id">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"  <meta charset="utf-8">"#)?;
    writeln!(
        out,
        r#"  <meta name="viewport" content="width=device-width, initial-scale=1">"#
    )?;
    if term.is_empty() {
        writeln!(out, "  <title>{TITLE}</title>")?;
    } else {
        writeln!(out, "  <title>{} - {TITLE}</title>", escape(term))?;
    }
    writeln!(out, r#"  <link rel="stylesheet" href="/assets/style.css">"#)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<main>")?;
    writeln!(out, r#"  <header>"#)?;
    writeln!(out, r#"    <a class="logo" href="/">{TITLE}</a>"#)?;
    writeln!(out, r#"    <form action="/search" method="GET">"#)?;
    writeln!(
        out,
        r#"      <input autofocus class="search-input" value="{}" placeholder="Enter a news topic" type="search" name="q">"#,
        escape(term)
    )?;
    writeln!(out, "    </form>")?;
    writeln!(out, "  </header>")?;

    if let Some(view) = view {
        render_results(&mut out, view)?;
    }

    writeln!(out, "</main>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn render_results(out: &mut String, view: &SearchView) -> fmt::Result {
    writeln!(out, r#"  <section class="container">"#)?;
    writeln!(out, r#"    <div class="result-count">"#)?;
    if view.total_results > 0 {
        writeln!(
            out,
            "      <p>About <strong>{}</strong> results were found. You are on page <strong>{}</strong> of <strong>{}</strong>.</p>",
            view.total_results, view.next_page, view.total_pages
        )?;
    } else if !view.term.is_empty() {
        writeln!(
            out,
            "      <p>No results found for your query: <strong>{}</strong>.</p>",
            escape(&view.term)
        )?;
    }
    writeln!(out, "    </div>")?;

    writeln!(out, r#"    <ul class="search-results">"#)?;
    for article in &view.articles {
        render_article(out, article)?;
    }
    writeln!(out, "    </ul>")?;

    render_pagination(out, view)?;
    writeln!(out, "  </section>")
}

fn render_article(out: &mut String, article: &ArticleView) -> fmt::Result {
    writeln!(out, r#"      <li class="news-article">"#)?;
    writeln!(out, "        <div>")?;
    writeln!(
        out,
        r#"          <a target="_blank" rel="noreferrer noopener" href="{}"><h3 class="title">{}</h3></a>"#,
        escape(web_url(&article.url).unwrap_or("#")),
        escape(&article.title)
    )?;
    writeln!(
        out,
        r#"          <p class="description">{}</p>"#,
        escape(&article.description)
    )?;
    write!(
        out,
        r#"          <div class="metadata"><p class="source">{}</p>"#,
        escape(&article.source_name)
    )?;
    if !article.author.is_empty() {
        write!(out, r#"<p class="author">{}</p>"#, escape(&article.author))?;
    }
    if !article.published_on.is_empty() {
        write!(
            out,
            r#"<time class="published-date">{}</time>"#,
            escape(&article.published_on)
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "        </div>")?;
    if let Some(src) = web_url(&article.image_url) {
        writeln!(
            out,
            r#"        <img class="article-image" src="{}" alt="">"#,
            escape(src)
        )?;
    }
    writeln!(out, "      </li>")
}

fn render_pagination(out: &mut String, view: &SearchView) -> fmt::Result {
    if view.previous_link.is_none() && view.following_link.is_none() {
        return Ok(());
    }

    writeln!(out, r#"    <div class="pagination">"#)?;
    if let Some(page) = view.previous_link {
        writeln!(
            out,
            r#"      <a href="{}" class="button previous-page">Previous</a>"#,
            escape(&search_href(&view.term, page))
        )?;
    }
    if let Some(page) = view.following_link {
        writeln!(
            out,
            r#"      <a href="{}" class="button next-page">Next</a>"#,
            escape(&search_href(&view.term, page))
        )?;
    }
    writeln!(out, "    </div>")
}

/// Link back into `/search` for the given term and page.
pub fn search_href(term: &str, page: u32) -> String {
    let page = page.to_string();
    let query = serde_urlencoded::to_string([("q", term), ("page", page.as_str())])
        .unwrap_or_else(|_| format!("page={page}"));
    format!("/search?{query}")
}

/// Upstream links are only rendered when they point at a web page.
fn web_url(raw: &str) -> Option<&str> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(raw)
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
