// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod news;
pub mod upstream;

// 時刻関連
pub use time::fixed_now;

// ニュースソース
pub use news::{CountingNewsSource, FailingNewsSource};

// 疑似 NewsAPI サーバー
pub use upstream::{StubUpstream, spawn_upstream};
