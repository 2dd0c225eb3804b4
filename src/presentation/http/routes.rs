// src/presentation/http/routes.rs
use crate::presentation::http::controllers::search;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(search::index))
        .route("/search", get(search::search))
        .route("/health", get(health))
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .fallback(search::index)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
