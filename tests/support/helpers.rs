// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use news_finder::application::{ports::news::NewsSource, services::ApplicationServices};
use news_finder::presentation::http::{routes::build_router, state::HttpState};
use std::path::PathBuf;
use std::sync::Arc;

pub fn fixture_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/assets")
}

pub fn build_test_state(source: Arc<dyn NewsSource>) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(source)),
    }
}

pub fn make_test_router(source: Arc<dyn NewsSource>) -> Router {
    build_router(build_test_state(source), fixture_assets_dir())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// ステータス、Content-Type、本文をまとめて取り出す
pub async fn read_response(resp: Response) -> (StatusCode, String, String) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
}

/// 500 で記事が一切描画されていないことを確認する
pub async fn assert_internal_error(resp: Response) {
    let (status, _, body) = read_response(resp).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("news-article"), "unexpected article markup: {body}");
    assert!(!body.contains("apiKey"), "upstream details leaked: {body}");
}
