pub mod search;

pub use search::{ArticleView, SearchView};
