mod search;
mod service;

pub use search::SearchNewsQuery;
pub use service::NewsQueryService;
