// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod extracted;
pub mod search_result;
pub mod term;

pub use extracted::ExtractedTexts;
pub use search_result::SearchResult;
pub use term::Term;
