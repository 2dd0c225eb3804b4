//! News search front-end: forwards a search term to NewsAPI and renders the
//! matching articles as a paginated HTML page.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
