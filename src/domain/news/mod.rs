pub mod entity;
pub mod pagination;
pub mod value_objects;

pub use entity::{Article, SearchResults, Source};
pub use pagination::{PAGE_SIZE, Search, total_pages};
pub use value_objects::{PageNumber, SearchTerm};
