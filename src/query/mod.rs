pub mod engine;
pub mod search;

pub use engine::QueryEngine;
pub use search::SearchMatcher;
